use super::*;
use std::collections::HashSet;

#[test]
fn names_are_unique_and_round_trip() {
    let names: HashSet<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    assert_eq!(names.len(), Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
    }
}

#[test]
fn historical_aliases_resolve() {
    assert_eq!("oddEven".parse::<Algorithm>().unwrap(), Algorithm::OddEven);
    assert_eq!("sleep".parse::<Algorithm>().unwrap(), Algorithm::Clock);
    assert!("bogo".parse::<Algorithm>().is_err());
}

#[test]
fn only_clock_is_nondeterministic() {
    let nondet: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(|a| !a.is_deterministic())
        .collect();
    assert_eq!(nondet, vec![Algorithm::Clock]);
}

#[test]
fn serde_uses_canonical_names() {
    let json = serde_json::to_string(&Algorithm::OddEven).unwrap();
    assert_eq!(json, "\"odd-even\"");
    let back: Algorithm = serde_json::from_str("\"radix\"").unwrap();
    assert_eq!(back, Algorithm::Radix);
}

#[test]
fn merge_replaces_sequence_contents() {
    let mut seq = vec![3, 1, 2];
    let mut tap = FrameTap::detached();
    Algorithm::Merge
        .sort(&mut seq, &SortConfig::new(9), &mut tap)
        .unwrap();
    assert_eq!(seq, vec![1, 2, 3]);
}
