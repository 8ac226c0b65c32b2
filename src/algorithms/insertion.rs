//! Insertion-style sorts that sink each element leftward by swaps.

use crate::engine::frame::FrameTap;

pub(crate) fn insertion_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            tap.emit(arr);
            j -= 1;
        }
    }
}

/// Gapped insertion sort with gaps `n/2, n/4, .., 1`.
pub(crate) fn shell_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                tap.emit(arr);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/insertion.rs"]
mod tests;
