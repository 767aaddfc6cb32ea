//! The backtracking search of every dictionary word in a grid.
//!
//! Paths are walked depth-first from every cell, moving to any adjacent unused
//! cell, while the trie is followed one letter at a time. A branch is dropped
//! as soon as its letters are not the prefix of a dictionary word.

use crate::{
    card::{Card, CardKind},
    error::*,
    grid::{Grid, Position, Score},
    sequence::{Sequence, Value},
    trie::{trie_node::TrieNode, Trie},
};
use log::debug;
use smartstring::{LazyCompact, SmartString};
use std::{
    collections::{btree_map::Entry, BTreeMap},
    ops::{Deref, DerefMut},
};

/// The state of one search, shared by the whole recursion.
/// Every change made when entering a cell is undone when leaving it,
/// see [Visit](Visit).
struct Search<'g> {
    grid: &'g Grid,

    /// Whether each cell (in row-major order) is in the current path.
    used: Vec<bool>,

    /// The cells of the current path.
    path: Vec<Position>,

    /// The letters of the current path.
    word: String,

    /// The sum of the cell scores of the current path.
    value: Value,

    /// The best sequence found for each word, sorted by word.
    found: BTreeMap<SmartString<LazyCompact>, Sequence>,

    /// The number of cards tried, for statistics.
    nb_steps: usize,
}

/// A cell entered by the search.
/// Gives access to the search state, and leaves the cell when dropped.
struct Visit<'s, 'g> {
    search: &'s mut Search<'g>,
    index: usize,
    nb_letters: usize,
    score: Score,
}

impl Drop for Visit<'_, '_> {
    fn drop(&mut self) {
        let search = &mut *self.search;
        search.used[self.index] = false;
        search.path.pop();
        search.word.truncate(search.word.len() - self.nb_letters);
        search.value -= Value::from(self.score);
    }
}

impl<'g> Deref for Visit<'_, 'g> {
    type Target = Search<'g>;

    fn deref(&self) -> &Self::Target {
        &*self.search
    }
}

impl DerefMut for Visit<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.search
    }
}

impl<'g> Search<'g> {
    fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            used: vec![false; grid.len()],
            path: Vec::with_capacity(grid.len()),
            word: String::new(),
            value: 0,
            found: BTreeMap::new(),
            nb_steps: 0,
        }
    }

    /// Add a cell to the current path, until the returned visit is dropped.
    fn enter(&mut self, pos: Position, card: &Card) -> Visit<'_, 'g> {
        let index = self.grid.index(pos);
        let score = self.grid.score(pos);

        self.used[index] = true;
        self.path.push(pos);
        self.word.push_str(&card.letters);
        self.value += Value::from(score);

        Visit {
            search: self,
            index,
            nb_letters: card.letters.len(),
            score,
        }
    }

    /// Record the current path as a found word.
    /// Only the best ranked sequence is kept for each word.
    fn record(&mut self) {
        let candidate = Sequence {
            word: self.word.as_str().into(),
            path: self.path.clone(),
            value: self.value,
        };

        match self.found.entry(candidate.word.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
            Entry::Occupied(mut entry) => {
                if candidate.outranks(entry.get()) {
                    entry.insert(candidate);
                }
            }
        }
    }

    /// Try to continue the current path with one alternative of a cell,
    /// `node` being the trie node reached by the current path.
    fn step(&mut self, node: &TrieNode, pos: Position, card: &Card) {
        self.nb_steps += 1;

        // A head card can only start a word
        if card.kind == CardKind::Head && !self.path.is_empty() {
            return;
        }

        let node = match card
            .letters
            .chars()
            .try_fold(node, |node, letter| node.transition(letter))
        {
            Some(node) => node,
            None => return,
        };

        // A tail card can only end a word
        if card.kind == CardKind::Tail && !node.may_terminate() {
            return;
        }

        let mut visit = self.enter(pos, card);

        if node.may_terminate() {
            visit.record();
            if card.kind == CardKind::Tail {
                return;
            }
        } else if visit.path.len() == visit.grid.len() {
            return;
        }

        let grid = visit.grid;
        for neighbor in grid.neighbors(pos) {
            if visit.used[grid.index(neighbor)] {
                continue;
            }
            for alternative in grid.alternatives(neighbor) {
                visit.step(node, neighbor, alternative);
            }
        }
    }

    /// Return the found sequences, best ranked first.
    fn into_ranked(self) -> Vec<Sequence> {
        let mut ranked: Vec<Sequence> = self.found.into_values().collect();
        ranked.sort_unstable();
        ranked
    }
}

/// A grid solver, finding every word of its [Trie](Trie) that can be spelled
/// in a grid.
///
/// The trie is only read, so a solver can be used for any number of grids.
#[derive(Debug, Copy, Clone)]
pub struct Solver<'t> {
    trie: &'t Trie,
}

impl<'t> Solver<'t> {
    pub fn new(trie: &'t Trie) -> Self {
        Self { trie }
    }

    /// Find every word that can be spelled by a path of adjacent cells,
    /// without using a cell twice.
    ///
    /// Each word is returned once, with its best ranked path.
    /// Words are sorted by decreasing value, then by decreasing path length.
    pub fn solve(&self, grid: &Grid) -> Vec<Sequence> {
        let mut search = Search::new(grid);

        for pos in grid.positions() {
            for card in grid.alternatives(pos) {
                search.step(self.trie.root(), pos, card);
            }
        }

        let nb_steps = search.nb_steps;
        let ranked = search.into_ranked();
        debug!(
            "Solved a {}x{} grid: {} words found in {} steps",
            grid.rows(),
            grid.cols(),
            ranked.len(),
            nb_steps
        );
        ranked
    }

    /// Parse the raw cell contents of a grid, given row by row, and solve it.
    ///
    /// Return an error without searching anything if the grid is not valid.
    pub fn solve_cards<R, S>(&self, raw_rows: &[R]) -> Result<Vec<Sequence>>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(self.solve(&Grid::new(raw_rows)?))
    }
}
