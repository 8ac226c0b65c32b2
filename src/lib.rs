//! sortreel runs a family of sorting algorithms while streaming every intermediate array state
//! ("frame") to a visualizer.
//!
//! # Pipeline overview
//!
//! 1. **Input**: a `Vec<u32>` with values in `0..=max` (see [`random_sequence`]).
//! 2. **Sort**: an [`Algorithm`] reorders the sequence and emits frames through a [`FrameTap`].
//! 3. **Visualize**: a [`Visualizer`] receives `setup`, then each frame, then `complete`
//!    ([`TerminalVisualizer`] for ASCII animation, [`GifVisualizer`] for an animated GIF).
//!
//! [`run_sort`] wires the three together for a single run; [`run_batch`] runs several algorithms
//! on the same input, optionally in parallel.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No globals**: the value ceiling, fill mode and frame rate are passed explicitly through
//!   [`SortConfig`] and [`RenderConfig`].
//! - **Observation only**: emitting a frame never changes the sequence or the control flow of an
//!   algorithm; a visualizer failure is reported after the sort returns.
//! - **Deterministic** for every algorithm except [`Algorithm::Clock`], whose ordering depends on
//!   the OS scheduler.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod algorithms;
mod engine;
mod foundation;
mod input;
mod render;
mod visualize;

pub use crate::engine::frame::FrameTap;
pub use crate::engine::registry::Algorithm;
pub use crate::engine::runner::{BatchOpts, SortOutcome, run_batch, run_sort, sort_in_place};
pub use crate::foundation::config::RunConfig;
pub use crate::foundation::core::{FillMode, Fps, FrameIndex, RenderConfig, SortConfig};
pub use crate::foundation::error::{SortError, SortResult};
pub use crate::input::{is_sorted, random_sequence, shuffle};
pub use crate::render::ascii::render_ascii;
pub use crate::render::raster::{BACKGROUND, INK, IndexedFrame, PALETTE, rasterize};
pub use crate::visualize::gif::{GifOpts, GifVisualizer, ensure_parent_dir};
pub use crate::visualize::sink::{InMemoryVisualizer, NullVisualizer, Visualizer};
pub use crate::visualize::terminal::{Pacing, TerminalVisualizer};
