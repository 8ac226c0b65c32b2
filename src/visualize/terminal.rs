use crate::engine::registry::Algorithm;
use crate::foundation::core::{FrameIndex, Fps, RenderConfig};
use crate::foundation::error::SortResult;
use crate::render::ascii::render_ascii;
use crate::visualize::sink::Visualizer;
use anyhow::Context as _;
use std::io::Write;
use std::time::Instant;

/// Clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// How the terminal visualizer spaces frames in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Hold each frame for one frame period before drawing the next.
    RealTime(Fps),
    /// Draw as fast as frames arrive.
    Unpaced,
}

/// Animates frames as ASCII art on a terminal (or any writer).
///
/// Pacing blocks inside `accept_frame`, which throttles the running sort to the frame rate.
pub struct TerminalVisualizer<W: Write> {
    out: W,
    cfg: RenderConfig,
    pacing: Pacing,
    last_draw: Option<Instant>,
}

impl TerminalVisualizer<std::io::Stdout> {
    /// Visualizer drawing to standard output.
    pub fn stdout(cfg: RenderConfig, pacing: Pacing) -> Self {
        Self::new(std::io::stdout(), cfg, pacing)
    }
}

impl<W: Write> TerminalVisualizer<W> {
    /// Visualizer drawing to `out`.
    pub fn new(out: W, cfg: RenderConfig, pacing: Pacing) -> Self {
        Self {
            out,
            cfg,
            pacing,
            last_draw: None,
        }
    }

    /// Consume the visualizer and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn wait_for_slot(&mut self) {
        let Pacing::RealTime(fps) = self.pacing else {
            return;
        };
        if let Some(last) = self.last_draw {
            let remaining = fps.frame_duration().saturating_sub(last.elapsed());
            std::thread::sleep(remaining);
        }
    }
}

impl<W: Write> Visualizer for TerminalVisualizer<W> {
    fn setup(&mut self, _algorithm: Algorithm) -> SortResult<()> {
        self.last_draw = None;
        Ok(())
    }

    fn accept_frame(&mut self, _idx: FrameIndex, frame: &[u32]) -> SortResult<()> {
        self.wait_for_slot();
        let text = render_ascii(frame, &self.cfg);
        self.out
            .write_all(CLEAR_SCREEN.as_bytes())
            .and_then(|()| self.out.write_all(text.as_bytes()))
            .and_then(|()| self.out.flush())
            .context("failed to write frame to terminal")?;
        self.last_draw = Some(Instant::now());
        Ok(())
    }

    fn complete(&mut self) -> SortResult<()> {
        self.out.flush().context("failed to flush terminal")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/terminal.rs"]
mod tests;
