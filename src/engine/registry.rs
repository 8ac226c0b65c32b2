use crate::algorithms::{
    bitonic, clock, cycle, distribution, exchange, heap, insertion, merge, partition, selection,
};
use crate::engine::frame::FrameTap;
use crate::foundation::core::SortConfig;
use crate::foundation::error::{SortError, SortResult};
use std::fmt;
use std::str::FromStr;

/// The sorting procedures the engine can run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Fixed-pass adjacent exchange.
    Bubble,
    /// Bidirectional bubble sort.
    Cocktail,
    /// Gap-shrinking (factor 1.3) exchange sort.
    Comb,
    /// Histogram sort over `0..=max`.
    Counting,
    /// Minimum-write permutation-cycle sort.
    Cycle,
    /// Gnome (stupid) sort.
    Gnome,
    /// Insertion sort by adjacent swaps.
    Insertion,
    /// Alternating odd/even phase transposition sort.
    OddEven,
    /// Selection sort.
    Selection,
    /// Delay-based concurrent sort ("sleep sort"); best-effort ordering only.
    Clock,
    /// Stooge sort.
    Stooge,
    /// Prefix-reversal sort.
    Pancake,
    /// Hoare-partition quicksort.
    Quick,
    /// Stable top-down merge sort.
    Merge,
    /// Shell sort with halving gaps.
    Shell,
    /// In-place heap sort.
    Heap,
    /// LSD decimal radix sort.
    Radix,
    /// Bitonic sorting network, generalised to any length.
    Bitonic,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 18] = [
        Algorithm::Bubble,
        Algorithm::Cocktail,
        Algorithm::Comb,
        Algorithm::Counting,
        Algorithm::Cycle,
        Algorithm::Gnome,
        Algorithm::Insertion,
        Algorithm::OddEven,
        Algorithm::Selection,
        Algorithm::Clock,
        Algorithm::Stooge,
        Algorithm::Pancake,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Shell,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Bitonic,
    ];

    /// Canonical name, also used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Cocktail => "cocktail",
            Algorithm::Comb => "comb",
            Algorithm::Counting => "counting",
            Algorithm::Cycle => "cycle",
            Algorithm::Gnome => "gnome",
            Algorithm::Insertion => "insertion",
            Algorithm::OddEven => "odd-even",
            Algorithm::Selection => "selection",
            Algorithm::Clock => "clock",
            Algorithm::Stooge => "stooge",
            Algorithm::Pancake => "pancake",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Shell => "shell",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
            Algorithm::Bitonic => "bitonic",
        }
    }

    /// Whether the same input always yields the same output and frame sequence.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Algorithm::Clock)
    }

    /// Whether the algorithm rejects values above [`SortConfig::max`].
    pub fn requires_bounds(self) -> bool {
        matches!(self, Algorithm::Counting | Algorithm::Radix)
    }

    /// Sort `seq` ascending, emitting frames through `tap`.
    ///
    /// Merge sort replaces the contents of `seq` with a newly built sequence; every other
    /// algorithm reorders it in place. No initial frame is emitted here.
    pub fn sort(self, seq: &mut Vec<u32>, cfg: &SortConfig, tap: &mut FrameTap<'_>) -> SortResult<()> {
        match self {
            Algorithm::Bubble => exchange::bubble_sort(seq, tap),
            Algorithm::Cocktail => exchange::cocktail_sort(seq, tap),
            Algorithm::Comb => exchange::comb_sort(seq, tap),
            Algorithm::Counting => distribution::counting_sort(seq, cfg, tap)?,
            Algorithm::Cycle => cycle::cycle_sort(seq, tap),
            Algorithm::Gnome => exchange::gnome_sort(seq, tap),
            Algorithm::Insertion => insertion::insertion_sort(seq, tap),
            Algorithm::OddEven => exchange::odd_even_sort(seq, tap),
            Algorithm::Selection => selection::selection_sort(seq, tap),
            Algorithm::Clock => clock::clock_sort(seq, cfg, tap)?,
            Algorithm::Stooge => partition::stooge_sort(seq, tap),
            Algorithm::Pancake => selection::pancake_sort(seq, tap),
            Algorithm::Quick => partition::quick_sort(seq, tap),
            Algorithm::Merge => *seq = merge::merge_sort(seq, tap),
            Algorithm::Shell => insertion::shell_sort(seq, tap),
            Algorithm::Heap => heap::heap_sort(seq, tap),
            Algorithm::Radix => distribution::radix_sort(seq, cfg, tap)?,
            Algorithm::Bitonic => bitonic::bitonic_sort(seq, tap),
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts canonical names plus the historical aliases `oddEven`, `odd_even` and `sleep`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oddEven" | "odd_even" => return Ok(Algorithm::OddEven),
            "sleep" => return Ok(Algorithm::Clock),
            _ => {}
        }
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SortError::validation(format!("unknown algorithm '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/registry.rs"]
mod tests;
