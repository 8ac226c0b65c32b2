use super::*;

#[test]
fn insertion_frame_count_equals_inversions() {
    let mut arr = vec![4, 3, 2, 1];
    let mut tap = FrameTap::detached();
    insertion_sort(&mut arr, &mut tap);
    assert_eq!(arr, vec![1, 2, 3, 4]);
    assert_eq!(tap.finish().unwrap(), 6);
}

#[test]
fn shell_sorts_reverse_run() {
    let mut arr: Vec<u32> = (0..17).rev().collect();
    let mut tap = FrameTap::detached();
    shell_sort(&mut arr, &mut tap);
    assert_eq!(arr, (0..17).collect::<Vec<u32>>());
    // Gapped passes move far elements early, so far fewer swaps than inversions.
    assert!(tap.finish().unwrap() < 17 * 16 / 2);
}

#[test]
fn shell_keeps_equal_values_together() {
    let mut arr = vec![2, 2, 1, 1, 0, 2];
    let mut tap = FrameTap::detached();
    shell_sort(&mut arr, &mut tap);
    assert_eq!(arr, vec![0, 1, 1, 2, 2, 2]);
}
