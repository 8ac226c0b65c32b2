use super::*;
use crate::engine::registry::Algorithm;
use crate::visualize::sink::{InMemoryVisualizer, Visualizer};

#[test]
fn merge_returns_sorted_copy() {
    let input = vec![5, 3, 8, 1, 9, 2];
    let mut tap = FrameTap::detached();
    let out = merge_sort(&input, &mut tap);
    assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(input, vec![5, 3, 8, 1, 9, 2]);
}

#[test]
fn merge_frames_are_permutations_of_input() {
    let input = vec![3, 1, 2, 0, 3, 1, 2];
    let mut expected = input.clone();
    expected.sort_unstable();

    let mut vis = InMemoryVisualizer::new();
    vis.setup(Algorithm::Merge).unwrap();
    let mut tap = FrameTap::new(&mut vis);
    let out = merge_sort(&input, &mut tap);
    tap.finish().unwrap();
    assert_eq!(out, expected);

    assert!(!vis.frames().is_empty());
    for (_, frame) in vis.frames() {
        let mut sorted = frame.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn merge_emits_empty_result_frame_per_merge() {
    // Two elements: one merge, one empty-result frame, one append frame.
    let mut tap = FrameTap::detached();
    let out = merge_sort(&[2, 1], &mut tap);
    assert_eq!(out, vec![1, 2]);
    assert_eq!(tap.finish().unwrap(), 2);
}

#[test]
fn merge_on_empty_input_emits_nothing() {
    let mut tap = FrameTap::detached();
    assert!(merge_sort(&[], &mut tap).is_empty());
    assert_eq!(tap.finish().unwrap(), 0);
}
