use super::*;

fn run(f: fn(&mut [u32], &mut FrameTap<'_>), input: &[u32]) -> (Vec<u32>, u64) {
    let mut arr = input.to_vec();
    let mut tap = FrameTap::detached();
    f(&mut arr, &mut tap);
    (arr, tap.finish().unwrap())
}

#[test]
fn comb_gap_floors_and_bottoms_out_at_one() {
    assert_eq!(next_comb_gap(10), 7);
    assert_eq!(next_comb_gap(7), 5);
    assert_eq!(next_comb_gap(2), 1);
    assert_eq!(next_comb_gap(1), 1);
    assert_eq!(next_comb_gap(0), 1);
}

#[test]
fn bubble_emits_once_per_swap() {
    // [3,2,1] needs exactly three adjacent swaps.
    let (out, frames) = run(bubble_sort, &[3, 2, 1]);
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(frames, 3);
}

#[test]
fn sorted_input_emits_nothing() {
    for f in [
        bubble_sort,
        cocktail_sort,
        comb_sort,
        gnome_sort,
        odd_even_sort,
    ] {
        let (out, frames) = run(f, &[1, 2, 2, 5, 9]);
        assert_eq!(out, vec![1, 2, 2, 5, 9]);
        assert_eq!(frames, 0);
    }
}

#[test]
fn cocktail_moves_small_tail_value_in_one_backward_pass() {
    let (out, frames) = run(cocktail_sort, &[2, 3, 4, 5, 1]);
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
    assert_eq!(frames, 4);
}

#[test]
fn gnome_and_odd_even_handle_duplicates() {
    let input = [4, 1, 4, 0, 1, 4];
    for f in [gnome_sort, odd_even_sort, comb_sort] {
        let (out, _) = run(f, &input);
        assert_eq!(out, vec![0, 1, 1, 4, 4, 4]);
    }
}

#[test]
fn tiny_inputs_terminate_without_frames() {
    for f in [
        bubble_sort,
        cocktail_sort,
        comb_sort,
        gnome_sort,
        odd_even_sort,
    ] {
        assert_eq!(run(f, &[]), (vec![], 0));
        assert_eq!(run(f, &[7]), (vec![7], 0));
    }
}
