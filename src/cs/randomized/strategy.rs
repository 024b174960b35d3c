use std::fmt;
use std::str::FromStr;

use super::{
    random_item_dual_iterate, random_item_select, random_item_sort_array,
    random_item_temp_array, RandomSource,
};
use crate::error::Error;

/// The interchangeable single-item selection strategies.
///
/// All of them pick each of the `k` matching items with probability `1 / k`; they
/// differ in passes, extra memory, number of draws, and whether they reorder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Single pass, one draw per match (`random_item_select`).
    RunningSelect,
    /// Count, then rescan to the drawn match (`random_item_dual_iterate`).
    DualIterate,
    /// Collect match positions, then draw one (`random_item_temp_array`).
    TempArray,
    /// Stable-partition matches to the tail, then draw one (`random_item_sort_array`).
    SortArray,
}

impl Algorithm {
    /// Every strategy, with the reordering one last so that running them in this
    /// order over shared data never feeds a partitioned slice to the others.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::RunningSelect,
        Algorithm::DualIterate,
        Algorithm::TempArray,
        Algorithm::SortArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::RunningSelect => "select",
            Algorithm::DualIterate => "dual-iterate",
            Algorithm::TempArray => "temp-array",
            Algorithm::SortArray => "sort-array",
        }
    }

    /// Whether [`select`](Self::select) may reorder the slice it is given.
    pub fn mutates_input(self) -> bool {
        matches!(self, Algorithm::SortArray)
    }

    /// Runs this strategy. Takes `&mut [T]` because `SortArray` partitions in place;
    /// the other strategies only read the slice.
    pub fn select<T, P, R>(self, items: &mut [T], test: P, rng: &mut R) -> Option<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
        R: RandomSource + ?Sized,
    {
        match self {
            Algorithm::RunningSelect => random_item_select(items, test, rng),
            Algorithm::DualIterate => random_item_dual_iterate(items, test, rng),
            Algorithm::TempArray => random_item_temp_array(items, test, rng),
            Algorithm::SortArray => random_item_sort_array(items, test, rng),
        }
    }

    /// Runs a strategy that does not reorder input against a shared slice.
    ///
    /// Returns `None` for `SortArray`, which needs exclusive access.
    pub fn select_shared<T, P, R>(self, items: &[T], test: P, rng: &mut R) -> Option<Option<T>>
    where
        T: Clone,
        P: Fn(&T) -> bool,
        R: RandomSource + ?Sized,
    {
        match self {
            Algorithm::RunningSelect => Some(random_item_select(items, test, rng)),
            Algorithm::DualIterate => Some(random_item_dual_iterate(items, test, rng)),
            Algorithm::TempArray => Some(random_item_temp_array(items, test, rng)),
            Algorithm::SortArray => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
