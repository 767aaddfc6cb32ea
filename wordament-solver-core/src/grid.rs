use crate::{card::Card, error::*};
use snafu::*;

/// The score of a cell, summed along a path.
pub type Score = i32;

/// The coordinates of a cell in a [Grid](Grid).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two cells are different and touch by an edge or a corner.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other
            && (self.row as isize - other.row as isize).abs() <= 1
            && (self.col as isize - other.col as isize).abs() <= 1
    }
}

/// A rectangular grid of parsed cells, with an optional score for each cell.
///
/// The grid is validated once when created: every cell holds at least one
/// [Card](Card) and the scores, if any, have the grid shape.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// The alternatives of each cell, in row-major order.
    cells: Vec<Vec<Card>>,
    /// The score of each cell, in row-major order.
    scores: Option<Vec<Score>>,
}

impl Grid {
    /// Parse the raw cell contents of a grid, given row by row.
    ///
    /// Return an error if a row does not have the length of the first one,
    /// or if a cell content is not valid.
    pub fn new<R, S>(raw_rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let cols = raw_rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(raw_rows.len() * cols);

        for (row, raw_row) in raw_rows.iter().enumerate() {
            let raw_row = raw_row.as_ref();
            ensure!(
                raw_row.len() == cols,
                RaggedGrid {
                    row,
                    expected: cols,
                    found: raw_row.len(),
                }
            );

            for (col, raw) in raw_row.iter().enumerate() {
                let raw = raw.as_ref();
                let alternatives = Card::parse_alternatives(raw).context(InvalidCell {
                    row,
                    col,
                    content: raw,
                })?;
                cells.push(alternatives);
            }
        }

        // A grid of empty rows has no cell at all
        let rows = if cols == 0 { 0 } else { raw_rows.len() };

        Ok(Self {
            rows,
            cols,
            cells,
            scores: None,
        })
    }

    /// Attach a score to every cell, given row by row.
    ///
    /// Return an error if the scores do not have the grid shape.
    pub fn with_scores<R: AsRef<[Score]>>(mut self, scores: &[R]) -> Result<Self> {
        let shape_ctx = ScoreShape {
            rows: self.rows,
            cols: self.cols,
        };
        let nb_rows = if self.cols == 0 { 0 } else { scores.len() };
        ensure!(
            nb_rows == self.rows && scores.iter().all(|row| row.as_ref().len() == self.cols),
            shape_ctx
        );

        self.scores = Some(
            scores
                .iter()
                .flat_map(|row| row.as_ref().iter().copied())
                .collect(),
        );
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the number of cells in the grid.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_scores(&self) -> bool {
        self.scores.is_some()
    }

    /// Return the row-major index of a position.
    pub(crate) fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row * self.cols + pos.col
    }

    /// Return the alternatives of a cell.
    pub fn alternatives(&self, pos: Position) -> &[Card] {
        &self.cells[self.index(pos)]
    }

    /// Return the score of a cell, or 0 if the grid has no scores.
    pub fn score(&self, pos: Position) -> Score {
        self.scores
            .as_ref()
            .map_or(0, |scores| scores[self.index(pos)])
    }

    /// Iterate over every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Iterate over the positions adjacent to a cell, including diagonals.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let rows = pos.row.saturating_sub(1)..(pos.row + 2).min(self.rows);
        let cols = pos.col.saturating_sub(1)..(pos.col + 2).min(self.cols);
        rows.flat_map(move |row| cols.clone().map(move |col| Position::new(row, col)))
            .filter(move |&other| other != pos)
    }
}
