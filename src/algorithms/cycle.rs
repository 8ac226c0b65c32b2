use crate::engine::frame::FrameTap;

/// Cycle sort: rotates each permutation cycle into place with the minimum number of writes.
///
/// While a cycle is open one value is held aside and the sequence temporarily holds a stale
/// duplicate, so a frame is emitted only once the cycle has closed.
pub(crate) fn cycle_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    for start in 0..n.saturating_sub(1) {
        let mut item = arr[start];
        let mut pos = final_position(arr, start, item);
        if pos == start {
            continue;
        }
        pos = skip_duplicates(arr, pos, item);
        std::mem::swap(&mut arr[pos], &mut item);

        while pos != start {
            pos = final_position(arr, start, item);
            pos = skip_duplicates(arr, pos, item);
            std::mem::swap(&mut arr[pos], &mut item);
        }
        tap.emit(arr);
    }
}

/// `start` plus the number of values after `start` smaller than `item`.
fn final_position(arr: &[u32], start: usize, item: u32) -> usize {
    start + arr[start + 1..].iter().filter(|&&v| v < item).count()
}

/// Step past slots already holding an equal value.
fn skip_duplicates(arr: &[u32], mut pos: usize, item: u32) -> usize {
    while arr[pos] == item {
        pos += 1;
    }
    pos
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/cycle.rs"]
mod tests;
