use super::*;
use crate::foundation::core::FillMode;

fn cfg(max: u32, mode: FillMode) -> RenderConfig {
    RenderConfig { max, mode }
}

#[test]
fn exact_mode_marks_single_row() {
    let text = render_ascii(&[0, 2, 1], &cfg(2, FillMode::Exact));
    assert_eq!(text, "#  \n  #\n # \n");
}

#[test]
fn below_mode_fills_rows_after_value() {
    let text = render_ascii(&[0, 2, 1], &cfg(2, FillMode::Below));
    assert_eq!(text, "#  \n# #\n###\n");
}

#[test]
fn above_mode_fills_rows_before_value() {
    let text = render_ascii(&[0, 2, 1], &cfg(2, FillMode::Above));
    assert_eq!(text, "###\n ##\n # \n");
}

#[test]
fn empty_frame_renders_blank_rows() {
    let text = render_ascii(&[], &cfg(3, FillMode::Below));
    assert_eq!(text, "\n\n\n\n");
}
