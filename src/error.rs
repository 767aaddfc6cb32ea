use snafu::Snafu;
use std::{
    fmt::{Debug, Display, Formatter},
    path::PathBuf,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display(
        "Usage: {} /path/to/words.txt [--nouns /path/to/nouns.txt]... [--verbs /path/to/verbs.txt]...",
        bin_name
    ))]
    CliArgs { bin_name: String },
    #[snafu(display("Could not open file {}: {}", path.display(), source))]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not read in file {}: {}", path.display(), source))]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Error while reading word list {}: {}", path.display(), source))]
    DictionaryRead {
        path: PathBuf,
        source: wordament_solver_core::Error,
    },
    #[snafu(display("Error while reading the standard input stream: {}", source))]
    Stdin { source: std::io::Error },
    #[snafu(display("Error while parsing the grid row '{}': {}", line, cause))]
    GridParse { line: String, cause: String },
    #[snafu(display("Either every cell or no cell of a grid must have a score"))]
    MixedScores,
    #[snafu(display("Invalid grid: {}", source))]
    InvalidGrid {
        source: wordament_solver_core::Error,
    },
}

// Link Error to Display to print the message when an error is returned from main.
// (taken from snafu issues, may be implemented in snafu in the future)
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
