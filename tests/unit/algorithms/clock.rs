use super::*;
use std::time::Duration;

fn fast_cfg(max: u32) -> SortConfig {
    SortConfig::new(max).with_clock_tick(Duration::from_millis(1))
}

#[test]
fn all_zero_input_terminates() {
    let mut arr = vec![0, 0, 0];
    let mut tap = FrameTap::detached();
    clock_sort(&mut arr, &fast_cfg(9), &mut tap).unwrap();
    assert_eq!(arr, vec![0, 0, 0]);
    assert_eq!(tap.finish().unwrap(), 3);
}

#[test]
fn empty_input_is_a_no_op() {
    let mut arr: Vec<u32> = vec![];
    let mut tap = FrameTap::detached();
    clock_sort(&mut arr, &fast_cfg(9), &mut tap).unwrap();
    assert_eq!(tap.finish().unwrap(), 0);
}

#[test]
fn output_is_a_permutation_of_input() {
    // Ordering is best-effort; only the multiset is asserted.
    let input = vec![4, 0, 2, 2, 1, 3];
    let mut arr = input.clone();
    let mut tap = FrameTap::detached();
    clock_sort(&mut arr, &fast_cfg(4), &mut tap).unwrap();
    let mut got = arr.clone();
    got.sort_unstable();
    let mut expected = input;
    expected.sort_unstable();
    assert_eq!(got, expected);
}

#[test]
fn widely_spaced_values_come_out_sorted() {
    let mut arr = vec![3, 0, 1, 2];
    let cfg = SortConfig::new(3).with_clock_tick(Duration::from_millis(80));
    let mut tap = FrameTap::detached();
    clock_sort(&mut arr, &cfg, &mut tap).unwrap();
    assert_eq!(arr, vec![0, 1, 2, 3]);
}

#[test]
fn silent_tasks_time_out_with_evaluation_error() {
    let (tx, rx) = mpsc::sync_channel::<u32>(2);
    tx.send(3).unwrap();
    let mut arr = vec![5, 3];
    let mut tap = FrameTap::detached();
    let err = collect(&rx, &mut arr, Duration::from_millis(5), &mut tap).unwrap_err();
    assert!(matches!(err, SortError::Evaluation(_)));
    assert!(err.to_string().contains("timed out after collecting 1 of 2"));
    assert_eq!(arr, vec![3, 5]);
    assert_eq!(tap.finish().unwrap(), 1);
    drop(tx);
}

#[test]
fn vanished_tasks_disconnect_with_evaluation_error() {
    let (tx, rx) = mpsc::sync_channel::<u32>(2);
    tx.send(5).unwrap();
    drop(tx);
    let mut arr = vec![5, 3];
    let mut tap = FrameTap::detached();
    let err = collect(&rx, &mut arr, Duration::from_secs(5), &mut tap).unwrap_err();
    assert!(matches!(err, SortError::Evaluation(_)));
    assert!(err.to_string().contains("exited after publishing 1 of 2"));
}

#[test]
fn unscheduled_value_is_rejected() {
    let (tx, rx) = mpsc::sync_channel::<u32>(1);
    tx.send(7).unwrap();
    let mut arr = vec![1];
    let mut tap = FrameTap::detached();
    let err = collect(&rx, &mut arr, Duration::from_secs(5), &mut tap).unwrap_err();
    assert!(err.to_string().contains("never scheduled"));
    assert_eq!(arr, vec![1]);
}

#[test]
fn unbounded_grace_waits_without_deadline() {
    let mut arr = vec![0, 0];
    let cfg = SortConfig {
        clock_timeout_grace: Duration::MAX,
        ..fast_cfg(9)
    };
    let mut tap = FrameTap::detached();
    clock_sort(&mut arr, &cfg, &mut tap).unwrap();
    assert_eq!(arr, vec![0, 0]);
}
