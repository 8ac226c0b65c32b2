//! Bitonic sort.
//!
//! Builds a descending half and an ascending half, then merges by comparing `i` with `i + m`
//! under a direction flag. `m` is the greatest power of two below the range length, so any
//! length sorts, not only powers of two.

use crate::engine::frame::FrameTap;

pub(crate) fn bitonic_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    sort(arr, 0, n, true, tap);
}

fn sort(arr: &mut [u32], lo: usize, len: usize, ascending: bool, tap: &mut FrameTap<'_>) {
    if len <= 1 {
        return;
    }
    let half = len / 2;
    sort(arr, lo, half, !ascending, tap);
    sort(arr, lo + half, len - half, ascending, tap);
    merge(arr, lo, len, ascending, tap);
}

fn merge(arr: &mut [u32], lo: usize, len: usize, ascending: bool, tap: &mut FrameTap<'_>) {
    if len <= 1 {
        return;
    }
    let m = greatest_power_of_two_below(len);
    for i in lo..lo + len - m {
        compare_swap(arr, i, i + m, ascending, tap);
    }
    merge(arr, lo, m, ascending, tap);
    merge(arr, lo + m, len - m, ascending, tap);
}

fn compare_swap(arr: &mut [u32], i: usize, j: usize, ascending: bool, tap: &mut FrameTap<'_>) {
    let out_of_order = if ascending {
        arr[i] > arr[j]
    } else {
        arr[i] < arr[j]
    };
    if out_of_order {
        arr.swap(i, j);
        tap.emit(arr);
    }
}

/// Largest power of two strictly below `n` (`n >= 2`).
fn greatest_power_of_two_below(n: usize) -> usize {
    let mut k = 1;
    while k < n {
        k <<= 1;
    }
    k >> 1
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/bitonic.rs"]
mod tests;
