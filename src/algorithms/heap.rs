use crate::engine::frame::FrameTap;

/// In-place heap sort: bottom-up max-heap construction, then repeated root extraction.
///
/// Emits after every sift-down swap and after every root/end exchange.
pub(crate) fn heap_sort(arr: &mut [u32], tap: &mut FrameTap<'_>) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for start in (0..n / 2).rev() {
        sift_down(arr, start, n, tap);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        tap.emit(arr);
        sift_down(arr, 0, end, tap);
    }
}

/// Restore the heap property for the subtree at `root`, considering only `arr[..end]`.
fn sift_down(arr: &mut [u32], mut root: usize, end: usize, tap: &mut FrameTap<'_>) {
    loop {
        let child = 2 * root + 1;
        if child >= end {
            return;
        }
        let mut largest = root;
        if arr[largest] < arr[child] {
            largest = child;
        }
        if child + 1 < end && arr[largest] < arr[child + 1] {
            largest = child + 1;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        tap.emit(arr);
        root = largest;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/heap.rs"]
mod tests;
