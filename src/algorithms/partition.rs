//! Recursive range sorts operating on index bounds of the whole sequence, so every frame shows
//! the full array.

use crate::engine::frame::FrameTap;

/// Quicksort with a Hoare partition around the middle element.
///
/// Keys equal to the pivot stop both scans and get swapped across, which splits runs of equal
/// values evenly instead of degrading to quadratic time.
pub(crate) fn quick_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    if arr.len() > 1 {
        quick(arr, 0, arr.len() - 1, tap);
    }
}

fn quick(arr: &mut [u32], lo: usize, hi: usize, tap: &mut FrameTap<'_>) {
    if lo >= hi {
        return;
    }
    let split = hoare_partition(arr, lo, hi, tap);
    quick(arr, lo, split, tap);
    quick(arr, split + 1, hi, tap);
}

/// Partition `arr[lo..=hi]` and return `split` with `lo <= split < hi` such that every element
/// of `arr[lo..=split]` is `<=` every element of `arr[split + 1..=hi]`.
fn hoare_partition(arr: &mut [u32], lo: usize, hi: usize, tap: &mut FrameTap<'_>) -> usize {
    let pivot = arr[lo + (hi - lo) / 2];
    let (mut i, mut j) = (lo, hi);
    loop {
        while arr[i] < pivot {
            i += 1;
        }
        while arr[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        arr.swap(i, j);
        tap.emit(arr);
        i += 1;
        j -= 1;
    }
}

/// Stooge sort: fix the endpoints, then sort the first two thirds, the last two thirds, and the
/// first two thirds again. Ranges of two or fewer elements only compare-swap.
pub(crate) fn stooge_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    if arr.len() > 1 {
        stooge(arr, 0, arr.len() - 1, tap);
    }
}

fn stooge(arr: &mut [u32], lo: usize, hi: usize, tap: &mut FrameTap<'_>) {
    if arr[hi] < arr[lo] {
        arr.swap(lo, hi);
        tap.emit(arr);
    }
    let len = hi - lo + 1;
    if len > 2 {
        let third = len / 3;
        stooge(arr, lo, hi - third, tap);
        stooge(arr, lo + third, hi, tap);
        stooge(arr, lo, hi - third, tap);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/partition.rs"]
mod tests;
