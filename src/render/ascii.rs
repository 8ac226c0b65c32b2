use crate::foundation::core::RenderConfig;

/// Render one frame as text.
///
/// One row per value from `0` to `cfg.max` (top to bottom), one column per index, `#` where the
/// fill predicate holds and a space elsewhere. Every row ends with `\n`.
pub fn render_ascii(frame: &[u32], cfg: &RenderConfig) -> String {
    let rows = cfg.rows() as usize;
    let mut out = String::with_capacity(rows * (frame.len() + 1));
    for row in 0..=cfg.max {
        out.extend(
            frame
                .iter()
                .map(|&v| if cfg.mode.covers(v, row) { '#' } else { ' ' }),
        );
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/ascii.rs"]
mod tests;
