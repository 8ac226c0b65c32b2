use super::*;

#[test]
fn selection_skips_self_swaps() {
    let mut arr = vec![1, 3, 2];
    let mut tap = FrameTap::detached();
    selection_sort(&mut arr, &mut tap);
    assert_eq!(arr, vec![1, 2, 3]);
    assert_eq!(tap.finish().unwrap(), 1);
}

#[test]
fn flip_reverses_prefix() {
    let mut arr = vec![1, 2, 3, 4, 5];
    let mut tap = FrameTap::detached();
    flip(&mut arr, 3, &mut tap);
    assert_eq!(arr, vec![4, 3, 2, 1, 5]);
    assert_eq!(tap.finish().unwrap(), 2);
}

#[test]
fn pancake_sorts_with_duplicates_and_zero() {
    let mut arr = vec![3, 0, 3, 1, 2, 0];
    let mut tap = FrameTap::detached();
    pancake_sort(&mut arr, &mut tap);
    assert_eq!(arr, vec![0, 0, 1, 2, 3, 3]);
}

#[test]
fn pancake_leaves_sorted_input_untouched() {
    let mut arr = vec![0, 1, 1, 4];
    let mut tap = FrameTap::detached();
    pancake_sort(&mut arr, &mut tap);
    assert_eq!(arr, vec![0, 1, 1, 4]);
    assert_eq!(tap.finish().unwrap(), 0);
}
