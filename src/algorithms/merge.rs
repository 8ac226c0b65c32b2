//! Top-down merge sort.
//!
//! The sort returns a new sequence. While a merge is in progress the working buffer holds only
//! the merged prefix of the current range; frames therefore show a composite of the sequence with
//! `merged ++ rest of left run ++ rest of right run` spliced over that range, which keeps every
//! frame a permutation of the input.

use crate::engine::frame::FrameTap;

/// Sort `input` ascending into a new vector. Ties keep left-run order (stable).
pub(crate) fn merge_sort(input: &[u32], tap: &mut FrameTap<'_>) -> Vec<u32> {
    let mut out = input.to_vec();
    let mut frame = Vec::with_capacity(out.len());
    sort_range(&mut out, 0, input.len(), &mut frame, tap);
    out
}

fn sort_range(arr: &mut [u32], lo: usize, hi: usize, frame: &mut Vec<u32>, tap: &mut FrameTap<'_>) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(arr, lo, mid, frame, tap);
    sort_range(arr, mid, hi, frame, tap);
    let merged = merge_runs(arr, lo, mid, hi, frame, tap);
    arr[lo..hi].copy_from_slice(&merged);
}

/// Merge the sorted runs `arr[lo..mid]` and `arr[mid..hi]` into a fresh buffer.
///
/// Emits one frame with the empty result, then one per element taken from a run head.
fn merge_runs(
    arr: &[u32],
    lo: usize,
    mid: usize,
    hi: usize,
    frame: &mut Vec<u32>,
    tap: &mut FrameTap<'_>,
) -> Vec<u32> {
    let mut merged = Vec::with_capacity(hi - lo);
    let (mut i, mut j) = (lo, mid);
    emit_composite(arr, lo, hi, &merged, &arr[i..mid], &arr[j..hi], frame, tap);

    while i < mid && j < hi {
        if arr[i] <= arr[j] {
            merged.push(arr[i]);
            i += 1;
        } else {
            merged.push(arr[j]);
            j += 1;
        }
        emit_composite(arr, lo, hi, &merged, &arr[i..mid], &arr[j..hi], frame, tap);
    }

    merged.extend_from_slice(&arr[i..mid]);
    merged.extend_from_slice(&arr[j..hi]);
    merged
}

#[allow(clippy::too_many_arguments)]
fn emit_composite(
    arr: &[u32],
    lo: usize,
    hi: usize,
    merged: &[u32],
    left: &[u32],
    right: &[u32],
    frame: &mut Vec<u32>,
    tap: &mut FrameTap<'_>,
) {
    if !tap.is_active() {
        // Nobody is looking; keep the frame count without assembling the composite.
        tap.emit(arr);
        return;
    }
    frame.clear();
    frame.extend_from_slice(&arr[..lo]);
    frame.extend_from_slice(merged);
    frame.extend_from_slice(left);
    frame.extend_from_slice(right);
    frame.extend_from_slice(&arr[hi..]);
    tap.emit(frame);
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/merge.rs"]
mod tests;
