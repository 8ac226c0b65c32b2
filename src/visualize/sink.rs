use crate::engine::registry::Algorithm;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SortError, SortResult};

/// Consumer of the frames produced by one sort run.
///
/// Lifecycle contract: `setup` is called once before any frame, `accept_frame` zero or more times
/// in strictly increasing [`FrameIndex`] order, then `complete` once after the sort returns.
/// Frames are borrowed; implementations that keep them must copy.
pub trait Visualizer {
    /// Called once before the first frame.
    fn setup(&mut self, algorithm: Algorithm) -> SortResult<()>;
    /// Observe one snapshot of the working sequence.
    fn accept_frame(&mut self, idx: FrameIndex, frame: &[u32]) -> SortResult<()>;
    /// Called once after the sort returns; flushes or finalizes output.
    fn complete(&mut self) -> SortResult<()>;
}

/// Visualizer that drops every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn setup(&mut self, _algorithm: Algorithm) -> SortResult<()> {
        Ok(())
    }

    fn accept_frame(&mut self, _idx: FrameIndex, _frame: &[u32]) -> SortResult<()> {
        Ok(())
    }

    fn complete(&mut self) -> SortResult<()> {
        Ok(())
    }
}

/// In-memory visualizer for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryVisualizer {
    algorithm: Option<Algorithm>,
    completed: bool,
    /// Frames in emission order.
    pub(crate) frames: Vec<(FrameIndex, Vec<u32>)>,
}

impl InMemoryVisualizer {
    /// Create a new in-memory visualizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Algorithm passed to `setup`, if any.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Whether `complete` has run since the last `setup`.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Vec<u32>)] {
        &self.frames
    }
}

impl Visualizer for InMemoryVisualizer {
    fn setup(&mut self, algorithm: Algorithm) -> SortResult<()> {
        self.algorithm = Some(algorithm);
        self.completed = false;
        self.frames.clear();
        Ok(())
    }

    fn accept_frame(&mut self, idx: FrameIndex, frame: &[u32]) -> SortResult<()> {
        if self.algorithm.is_none() {
            return Err(SortError::evaluation("in-memory visualizer not set up"));
        }
        if self.completed {
            return Err(SortError::evaluation("in-memory visualizer already completed"));
        }
        self.frames.push((idx, frame.to_vec()));
        Ok(())
    }

    fn complete(&mut self) -> SortResult<()> {
        self.completed = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/sink.rs"]
mod tests;
