use super::*;

#[test]
fn in_memory_records_lifecycle() {
    let mut vis = InMemoryVisualizer::new();
    vis.setup(Algorithm::Bubble).unwrap();
    vis.accept_frame(FrameIndex(0), &[3, 1, 2]).unwrap();
    vis.accept_frame(FrameIndex(1), &[1, 3, 2]).unwrap();
    vis.complete().unwrap();

    assert_eq!(vis.algorithm(), Some(Algorithm::Bubble));
    assert!(vis.is_complete());
    assert_eq!(vis.frames().len(), 2);
    assert_eq!(vis.frames()[1], (FrameIndex(1), vec![1, 3, 2]));
}

#[test]
fn in_memory_rejects_frames_outside_lifecycle() {
    let mut vis = InMemoryVisualizer::new();
    assert!(vis.accept_frame(FrameIndex(0), &[1]).is_err());

    vis.setup(Algorithm::Heap).unwrap();
    vis.complete().unwrap();
    assert!(vis.accept_frame(FrameIndex(0), &[1]).is_err());
}

#[test]
fn setup_resets_previous_run() {
    let mut vis = InMemoryVisualizer::new();
    vis.setup(Algorithm::Quick).unwrap();
    vis.accept_frame(FrameIndex(0), &[1, 2]).unwrap();
    vis.complete().unwrap();

    vis.setup(Algorithm::Merge).unwrap();
    assert!(vis.frames().is_empty());
    assert!(!vis.is_complete());
}
