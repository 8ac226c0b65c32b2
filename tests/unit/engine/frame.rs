use super::*;
use crate::engine::registry::Algorithm;
use crate::visualize::sink::InMemoryVisualizer;

struct FailAfter {
    accepted: usize,
    limit: usize,
}

impl Visualizer for FailAfter {
    fn setup(&mut self, _algorithm: Algorithm) -> SortResult<()> {
        Ok(())
    }

    fn accept_frame(&mut self, _idx: FrameIndex, _frame: &[u32]) -> SortResult<()> {
        if self.accepted == self.limit {
            return Err(SortError::evaluation("sink full"));
        }
        self.accepted += 1;
        Ok(())
    }

    fn complete(&mut self) -> SortResult<()> {
        Ok(())
    }
}

#[test]
fn detached_tap_counts_without_consumer() {
    let mut tap = FrameTap::detached();
    assert!(!tap.is_active());
    tap.emit(&[1, 2, 3]);
    tap.emit(&[]);
    assert_eq!(tap.finish().unwrap(), 2);
}

#[test]
fn frames_are_indexed_in_order() {
    let mut vis = InMemoryVisualizer::new();
    vis.setup(Algorithm::Gnome).unwrap();
    let mut tap = FrameTap::new(&mut vis);
    assert!(tap.is_active());
    tap.emit(&[2, 1]);
    tap.emit(&[1, 2]);
    assert_eq!(tap.finish().unwrap(), 2);

    let idx: Vec<u64> = vis.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(vis.frames()[0].1, vec![2, 1]);
}

#[test]
fn first_error_is_latched_and_later_frames_dropped() {
    let mut vis = FailAfter {
        accepted: 0,
        limit: 1,
    };
    let mut tap = FrameTap::new(&mut vis);
    tap.emit(&[1]);
    tap.emit(&[2]);
    assert!(!tap.is_active());
    tap.emit(&[3]);
    assert_eq!(tap.emitted(), 3);
    let err = tap.finish().unwrap_err();
    assert!(err.to_string().contains("sink full"));
    assert_eq!(vis.accepted, 1);
}
