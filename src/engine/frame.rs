use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SortError, SortResult};
use crate::visualize::sink::Visualizer;

/// The frame callback handed to every algorithm.
///
/// A tap either forwards frames to a [`Visualizer`] or, when detached, drops them. Emission is
/// read-only with respect to the sequence and never reports back to the algorithm: the first
/// error from the visualizer is latched, later frames are dropped, and the error surfaces from
/// [`FrameTap::finish`] once the sort has returned.
pub struct FrameTap<'a> {
    sink: Option<&'a mut dyn Visualizer>,
    emitted: u64,
    error: Option<SortError>,
}

impl<'a> FrameTap<'a> {
    /// Tap forwarding to `sink`.
    pub fn new(sink: &'a mut dyn Visualizer) -> Self {
        Self {
            sink: Some(sink),
            emitted: 0,
            error: None,
        }
    }

    /// Tap with no consumer attached.
    pub fn detached() -> Self {
        Self {
            sink: None,
            emitted: 0,
            error: None,
        }
    }

    /// Whether emitted frames currently reach a consumer.
    ///
    /// Algorithms that assemble a composite frame use this to skip the work.
    pub fn is_active(&self) -> bool {
        self.sink.is_some() && self.error.is_none()
    }

    /// Number of frames emitted so far, delivered or not.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Emit one frame.
    pub fn emit(&mut self, frame: &[u32]) {
        let idx = FrameIndex(self.emitted);
        self.emitted += 1;
        if self.error.is_some() {
            return;
        }
        let Some(sink) = self.sink.as_deref_mut() else {
            return;
        };
        if let Err(e) = sink.accept_frame(idx, frame) {
            tracing::warn!(frame = idx.0, error = %e, "visualizer rejected frame; dropping the rest");
            self.error = Some(e);
        }
    }

    /// Release the visualizer, returning the frame count or the latched error.
    pub fn finish(self) -> SortResult<u64> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.emitted),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/frame.rs"]
mod tests;
