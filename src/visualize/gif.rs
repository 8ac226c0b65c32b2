use crate::engine::registry::Algorithm;
use crate::foundation::core::{FrameIndex, RenderConfig};
use crate::foundation::error::{SortError, SortResult};
use crate::render::raster::{IndexedFrame, rasterize};
use crate::visualize::sink::Visualizer;
use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Options for [`GifVisualizer`] output.
#[derive(Clone, Debug)]
pub struct GifOpts {
    /// Directory receiving `<algorithm>.gif`.
    pub out_dir: PathBuf,
    /// Delay between animation frames, in milliseconds.
    pub frame_delay_ms: u32,
    /// Number of extra loops after the first play; `None` loops forever.
    pub repeat: Option<u16>,
}

impl GifOpts {
    /// Default inter-frame delay (two hundredths of a second).
    pub const DEFAULT_FRAME_DELAY_MS: u32 = 20;

    /// Create options writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            frame_delay_ms: Self::DEFAULT_FRAME_DELAY_MS,
            repeat: Some(1),
        }
    }
}

/// Accumulates rasterized frames and encodes them into one animated GIF on `complete`.
pub struct GifVisualizer {
    opts: GifOpts,
    cfg: RenderConfig,
    algorithm: Option<Algorithm>,
    frames: Vec<IndexedFrame>,
}

impl GifVisualizer {
    /// Create a new GIF visualizer.
    pub fn new(opts: GifOpts, cfg: RenderConfig) -> Self {
        Self {
            opts,
            cfg,
            algorithm: None,
            frames: Vec::new(),
        }
    }

    /// File the current run is written to, once `setup` has run.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.algorithm
            .map(|a| self.opts.out_dir.join(format!("{}.gif", a.name())))
    }

    /// Number of frames buffered for the current run.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn encode(&self, path: &Path) -> SortResult<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create gif '{}'", path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        let repeat = match self.opts.repeat {
            Some(n) => Repeat::Finite(n),
            None => Repeat::Infinite,
        };
        encoder
            .set_repeat(repeat)
            .with_context(|| format!("failed to write gif header '{}'", path.display()))?;

        let delay = Delay::from_numer_denom_ms(self.opts.frame_delay_ms, 1);
        for frame in &self.frames {
            encoder
                .encode_frame(Frame::from_parts(frame.to_rgba(), 0, 0, delay))
                .with_context(|| format!("failed to encode gif frame '{}'", path.display()))?;
        }
        Ok(())
    }
}

impl Visualizer for GifVisualizer {
    fn setup(&mut self, algorithm: Algorithm) -> SortResult<()> {
        if self.cfg.rows() > u32::from(u16::MAX) {
            return Err(SortError::validation(format!(
                "gif height {} exceeds {}",
                self.cfg.rows(),
                u16::MAX
            )));
        }
        self.algorithm = Some(algorithm);
        self.frames.clear();
        Ok(())
    }

    fn accept_frame(&mut self, _idx: FrameIndex, frame: &[u32]) -> SortResult<()> {
        if self.algorithm.is_none() {
            return Err(SortError::evaluation("gif visualizer not set up"));
        }
        if frame.len() > usize::from(u16::MAX) {
            return Err(SortError::validation(format!(
                "gif width {} exceeds {}",
                frame.len(),
                u16::MAX
            )));
        }
        self.frames.push(rasterize(frame, &self.cfg));
        Ok(())
    }

    fn complete(&mut self) -> SortResult<()> {
        let path = self
            .output_path()
            .ok_or_else(|| SortError::evaluation("gif visualizer not set up"))?;
        if self.frames.is_empty() {
            return Err(SortError::evaluation("gif visualizer received no frames"));
        }
        ensure_parent_dir(&path)?;
        self.encode(&path)?;
        tracing::info!(path = %path.display(), frames = self.frames.len(), "wrote gif");
        self.frames.clear();
        Ok(())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SortResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/gif.rs"]
mod tests;
