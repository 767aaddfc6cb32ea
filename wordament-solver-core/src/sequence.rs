use crate::grid::Position;
use smartstring::{LazyCompact, SmartString};
use std::cmp::Ordering;

/// The total value of a path, wide enough to sum the score of every cell of a grid.
pub type Value = i64;

/// A word found in a grid, with the path of cells spelling it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sequence {
    /// The word spelled by the path, in lowercase.
    pub word: SmartString<LazyCompact>,

    /// The cells spelling the word, in order. Never empty, never twice the same cell.
    pub path: Vec<Position>,

    /// The sum of the cell scores along the path, 0 if the grid has no scores.
    pub value: Value,
}

impl Sequence {
    /// Compare two sequences by value, then by path length.
    /// Greater means better.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.path.len().cmp(&other.path.len()))
    }

    /// Whether this sequence is strictly better than the other one.
    ///
    /// On equal values, the *longer* path wins, which keeps the path using
    /// the most cells when a word can be spelled in several ways.
    pub fn outranks(&self, other: &Self) -> bool {
        self.cmp_rank(other) == Ordering::Greater
    }
}

impl PartialOrd for Sequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The ranking order: best sequences first.
impl Ord for Sequence {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cmp_rank(self)
            .then_with(|| self.word.cmp(&other.word))
            .then_with(|| self.path.cmp(&other.path))
    }
}
