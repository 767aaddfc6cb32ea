use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display("Invalid cell at row {} column {}: '{}'", row, col, content))]
    InvalidCell {
        row: usize,
        col: usize,
        content: String,
    },
    #[snafu(display("Row {} has {} cells while the grid has {} columns", row, found, expected))]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[snafu(display("The score array does not have the grid shape {}x{}", rows, cols))]
    ScoreShape { rows: usize, cols: usize },
    #[snafu(display("Could not insert '{}' in the trie: only ASCII letters are accepted", word))]
    InvalidWord { word: String },
    #[snafu(display("Could not read the word list: {}", source))]
    WordRead { source: std::io::Error },
}
