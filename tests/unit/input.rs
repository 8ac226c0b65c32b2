use super::*;

#[test]
fn seeded_sequences_are_reproducible() {
    let a = random_sequence(50, 9, Some(42));
    let b = random_sequence(50, 9, Some(42));
    assert_eq!(a, b);
    assert_eq!(a.len(), 50);
    assert!(a.iter().all(|&v| v <= 9));
}

#[test]
fn zero_max_gives_all_zeros() {
    assert_eq!(random_sequence(4, 0, None), vec![0, 0, 0, 0]);
}

#[test]
fn shuffle_preserves_values() {
    let mut seq: Vec<u32> = (0..20).collect();
    shuffle(&mut seq, Some(7));
    let mut sorted = seq.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
}

#[test]
fn is_sorted_edges() {
    assert!(is_sorted(&[]));
    assert!(is_sorted(&[3]));
    assert!(is_sorted(&[1, 1, 2]));
    assert!(!is_sorted(&[2, 1]));
}
