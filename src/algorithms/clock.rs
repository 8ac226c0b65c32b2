//! Clock sort ("sleep sort"): order derived from wall-clock delays, not comparisons.
//!
//! One detached thread per element sleeps `value * clock_tick` and publishes its value on a
//! bounded channel; the collector takes values in arrival order. The result is only as good as
//! the scheduler: values closer together than the scheduling jitter may arrive swapped. This is a
//! demonstration algorithm, never a correctness-bearing sort.
//!
//! The collector gives up once the largest scheduled delay plus `clock_timeout_grace` has passed
//! while it was waiting. Time spent inside the frame callback does not count against that budget,
//! so a slow visualizer cannot trigger a timeout. A task that dies without publishing surfaces as
//! a disconnect once every other task is done.

use crate::engine::frame::FrameTap;
use crate::foundation::core::SortConfig;
use crate::foundation::error::{SortError, SortResult};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

pub(crate) fn clock_sort(arr: &mut [u32], cfg: &SortConfig, tap: &mut FrameTap<'_>) -> SortResult<()> {
    let Some(&largest) = arr.iter().max() else {
        return Ok(());
    };

    let (tx, rx) = mpsc::sync_channel::<u32>(1);
    for (i, &value) in arr.iter().enumerate() {
        let tx = tx.clone();
        let delay = cfg.clock_tick.saturating_mul(value);
        std::thread::Builder::new()
            .name(format!("clock-sort-{i}"))
            .spawn(move || {
                std::thread::sleep(delay);
                // The collector may already have given up; nothing left to do then.
                let _ = tx.send(value);
            })
            .map_err(|e| SortError::evaluation(format!("failed to spawn clock-sort task: {e}")))?;
    }
    drop(tx);

    let budget = cfg
        .clock_tick
        .saturating_mul(largest)
        .saturating_add(cfg.clock_timeout_grace);
    collect(&rx, arr, budget, tap)
}

/// Receive `arr.len()` values into `arr` in arrival order, waiting at most `budget` outside the
/// frame callback.
fn collect(
    rx: &Receiver<u32>,
    arr: &mut [u32],
    budget: Duration,
    tap: &mut FrameTap<'_>,
) -> SortResult<()> {
    let n = arr.len();
    // A budget too large to represent as an instant waits without a deadline.
    let mut deadline = Instant::now().checked_add(budget);
    for slot in 0..n {
        let received = match deadline {
            Some(at) => rx.recv_timeout(at.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let value = received.map_err(|e| match e {
            RecvTimeoutError::Timeout => SortError::evaluation(format!(
                "clock sort timed out after collecting {slot} of {n} values"
            )),
            RecvTimeoutError::Disconnected => SortError::evaluation(format!(
                "clock sort tasks exited after publishing {slot} of {n} values"
            )),
        })?;

        // Pull the arrival into `slot` from the uncollected tail so the buffer stays a
        // permutation of the input.
        let at = arr[slot..]
            .iter()
            .position(|&v| v == value)
            .map(|p| slot + p)
            .ok_or_else(|| SortError::evaluation("clock sort received a value it never scheduled"))?;
        arr.swap(slot, at);

        let paused = Instant::now();
        tap.emit(arr);
        deadline = deadline.and_then(|at| at.checked_add(paused.elapsed()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/clock.rs"]
mod tests;
