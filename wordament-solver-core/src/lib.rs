//! The core library of the wordament-solver project.
//!
//! Define the dictionary [Trie](Trie), the [Grid](Grid) model and the
//! [Solver](Solver) finding every dictionary word that can be traced in a grid.

pub mod card;
mod error;
mod grid;
pub mod lexicon;
mod sequence;
mod solver;
mod trie;

pub use card::{Card, CardKind};
pub use error::{Error, Result};
pub use grid::{Grid, Position, Score};
pub use sequence::{Sequence, Value};
pub use solver::Solver;
pub use trie::{
    index::{LetterIndex, ALPHABET_LEN},
    trie_node::{Branch, TrieNode},
    Trie,
};
