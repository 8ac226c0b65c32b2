//! Distribution sorts: counting sort and LSD radix sort.
//!
//! Both drain a histogram in ascending bucket order and emit one frame per non-empty bucket
//! written back, not one per element. Writing a bucket also rewrites the unplaced remainder
//! behind it in its previous relative order, so the sequence stays a permutation of the input
//! after every bucket.

use crate::engine::frame::FrameTap;
use crate::foundation::core::SortConfig;
use crate::foundation::error::SortResult;

const RADIX: u64 = 10;

/// Counting sort over values `0..=cfg.max`.
///
/// Values above the ceiling are rejected before the sequence is touched. The histogram only
/// spans up to the largest value present.
pub(crate) fn counting_sort(
    arr: &mut [u32],
    cfg: &SortConfig,
    tap: &mut FrameTap<'_>,
) -> SortResult<()> {
    cfg.check_bounds(arr)?;
    if arr.len() < 2 {
        return Ok(());
    }
    let Some(&largest) = arr.iter().max() else {
        return Ok(());
    };
    let buckets = largest as usize + 1;
    drain_buckets(arr, buckets, |v| v as usize, tap);
    Ok(())
}

/// LSD radix sort, one stable decimal-digit pass per digit of the largest value present.
pub(crate) fn radix_sort(arr: &mut [u32], cfg: &SortConfig, tap: &mut FrameTap<'_>) -> SortResult<()> {
    cfg.check_bounds(arr)?;
    if arr.len() < 2 {
        return Ok(());
    }
    let Some(&largest) = arr.iter().max() else {
        return Ok(());
    };
    let largest = u64::from(largest);
    let mut exp = 1u64;
    while largest / exp > 0 {
        drain_buckets(arr, RADIX as usize, |v| digit(v, exp), tap);
        exp *= RADIX;
    }
    Ok(())
}

fn digit(value: u32, exp: u64) -> usize {
    ((u64::from(value) / exp) % RADIX) as usize
}

/// One stable counting pass keyed on `key`, written back bucket by bucket.
fn drain_buckets(
    arr: &mut [u32],
    buckets: usize,
    key: impl Fn(u32) -> usize,
    tap: &mut FrameTap<'_>,
) {
    let mut counts = vec![0usize; buckets];
    for &v in arr.iter() {
        counts[key(v)] += 1;
    }

    let src = arr.to_vec();
    let mut placed = 0;
    for (bucket, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        for &v in src.iter().filter(|&&v| key(v) == bucket) {
            arr[placed] = v;
            placed += 1;
        }
        let mut w = placed;
        for &v in src.iter().filter(|&&v| key(v) > bucket) {
            arr[w] = v;
            w += 1;
        }
        tap.emit(arr);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/distribution.rs"]
mod tests;
