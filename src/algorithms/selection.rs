//! Sorts that repeatedly select an extreme of the unsorted region: selection and pancake.

use crate::engine::frame::FrameTap;

/// Swaps the minimum of `arr[i..]` into slot `i`; a frame only when a swap actually happens.
pub(crate) fn selection_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
            tap.emit(arr);
        }
    }
}

/// Flips the maximum of each unsorted prefix to the front, then to the end of the prefix.
pub(crate) fn pancake_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    for size in (2..=arr.len()).rev() {
        // Last occurrence wins so an already-placed maximum is left alone.
        let Some(max_idx) = (0..size).max_by_key(|&i| arr[i]) else {
            continue;
        };
        if max_idx == size - 1 {
            continue;
        }
        flip(arr, max_idx, tap);
        flip(arr, size - 1, tap);
    }
}

/// Reverse `arr[..=end]` one swap at a time.
fn flip(arr: &mut [u32], end: usize, tap: &mut FrameTap<'_>) {
    let (mut lo, mut hi) = (0, end);
    while lo < hi {
        arr.swap(lo, hi);
        tap.emit(arr);
        lo += 1;
        hi -= 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/selection.rs"]
mod tests;
