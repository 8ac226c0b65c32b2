//! Adjacent- and gap-exchange sorts: bubble, cocktail, comb, gnome, odd-even.
//!
//! Every procedure emits one frame after each swap and nothing after a bare comparison.

use crate::engine::frame::FrameTap;

/// Comb sort shrink factor.
const COMB_SHRINK: f64 = 1.3;

/// Fixed `n` passes of adjacent exchanges, each pass ignoring the already-settled tail.
pub(crate) fn bubble_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    for pass in 0..n {
        for j in 0..n - 1 - pass {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                tap.emit(arr);
            }
        }
    }
}

/// Bidirectional bubble sort over a shrinking window.
pub(crate) fn cocktail_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let mut start = 0;
    let mut end = arr.len();
    while end > start + 1 {
        let mut swapped = false;
        for i in start..end - 1 {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                tap.emit(arr);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;

        swapped = false;
        for i in (start..end - 1).rev() {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                tap.emit(arr);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        start += 1;
    }
}

/// Gap-decreasing bubble sort; stops after a gap-1 pass without swaps.
pub(crate) fn comb_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    let mut gap = n;
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = next_comb_gap(gap);
        swapped = false;
        for i in 0..n.saturating_sub(gap) {
            if arr[i] > arr[i + gap] {
                arr.swap(i, i + gap);
                tap.emit(arr);
                swapped = true;
            }
        }
    }
}

fn next_comb_gap(gap: usize) -> usize {
    ((gap as f64 / COMB_SHRINK).floor() as usize).max(1)
}

pub(crate) fn gnome_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let mut i = 1;
    while i < arr.len() {
        if arr[i] >= arr[i - 1] {
            i += 1;
        } else {
            arr.swap(i, i - 1);
            tap.emit(arr);
            if i > 1 {
                i -= 1;
            }
        }
    }
}

/// Alternating odd/even phases until a full round performs no swap.
pub(crate) fn odd_even_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for phase in [1, 0] {
            for i in (phase..n - 1).step_by(2) {
                if arr[i] > arr[i + 1] {
                    arr.swap(i, i + 1);
                    tap.emit(arr);
                    sorted = false;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/exchange.rs"]
mod tests;
