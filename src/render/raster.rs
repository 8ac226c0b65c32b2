use crate::foundation::core::RenderConfig;
use image::{Rgba, RgbaImage};

/// Palette slot for empty cells.
pub const BACKGROUND: u8 = 0;
/// Palette slot for filled cells.
pub const INK: u8 = 1;

/// Two-colour palette: white background, black ink (RGBA8, straight alpha).
pub const PALETTE: [[u8; 4]; 2] = [[255, 255, 255, 255], [0, 0, 0, 255]];

/// A frame rasterized to palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    /// Width in pixels (one per sequence index, at least 1).
    pub width: u32,
    /// Height in pixels (`max + 1`).
    pub height: u32,
    /// Palette indices, tightly packed, row-major.
    pub indices: Vec<u8>,
}

impl IndexedFrame {
    /// Palette index at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.indices[y as usize * self.width as usize + x as usize]
    }

    /// Expand to RGBA8 pixels through [`PALETTE`].
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(PALETTE[self.get(x, y) as usize])
        })
    }
}

/// Rasterize one frame: value `v` is drawn at pixel row `max - v`, so larger values sit higher,
/// with the same fill predicate as the text renderer.
///
/// An empty frame becomes a single blank column so encoders never see a zero-width image.
pub fn rasterize(frame: &[u32], cfg: &RenderConfig) -> IndexedFrame {
    let width = (frame.len() as u32).max(1);
    let height = cfg.rows();
    let stride = width as usize;
    let mut indices = vec![BACKGROUND; stride * height as usize];
    for (x, &v) in frame.iter().enumerate() {
        for y in 0..height {
            if cfg.mode.covers(v, cfg.max - y) {
                indices[y as usize * stride + x] = INK;
            }
        }
    }
    IndexedFrame {
        width,
        height,
        indices,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
