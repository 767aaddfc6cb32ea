//! The application binary of the wordament-solver project.
//!
//! Load a dictionary, then listen for grids in
//! [the standard input stream](std::io::stdin) and print every word that
//! can be traced in each of them, best ranked first.
//!
//! A grid is given row by row, one line per row and cells separated by spaces,
//! and ends with an empty line:
//!
//! ```text
//! s:2 e:1 r:2 s:2
//! p:4 a:1 t:2 qu:10
//! l:3 i:1 n:2 -ing:12
//! e:1 s:2 e/a:1 r:2
//! ```
//!
//! See the [wordament-solver-core](../wordament_solver_core/index.html) crate
//! for documentation about the solver itself.

use error::*;
use log::info;
use snafu::*;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use wordament_solver_core::{Solver, Trie};

mod error;
mod query;

/// Represents the expected parsed program arguments.
#[derive(Debug)]
struct Args {
    dict_path: PathBuf,
    noun_paths: Vec<PathBuf>,
    verb_paths: Vec<PathBuf>,
}

/// Parse the arguments and return an error if a path is missing or an option is not recognized.
fn parse_args() -> Result<Args> {
    const BIN_NAME_DEFAULT: &str = "wordament-solver";
    let mut args = std::env::args();

    let bin_name = args.next().unwrap_or_else(|| BIN_NAME_DEFAULT.to_string());
    let cliargs_ctx = CliArgs {
        bin_name: &bin_name,
    };

    let dict_path = args.next().context(cliargs_ctx)?.into();
    let mut noun_paths = Vec::new();
    let mut verb_paths = Vec::new();

    while let Some(option) = args.next() {
        let paths = match option.as_str() {
            "--nouns" => &mut noun_paths,
            "--verbs" => &mut verb_paths,
            _ => return None.context(cliargs_ctx),
        };
        paths.push(args.next().context(cliargs_ctx)?.into());
    }

    Ok(Args {
        dict_path,
        noun_paths,
        verb_paths,
    })
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).context(FileOpen { path })?;
    Ok(BufReader::new(file))
}

/// Add every word of a list, one per line, with the given insertion function.
fn add_word_list(
    trie: &mut Trie,
    path: &Path,
    add: fn(&mut Trie, &str) -> wordament_solver_core::Result<()>,
) -> Result<()> {
    for line in open(path)?.lines() {
        let line = line.context(FileRead { path })?;
        let word = line.trim();
        if !word.is_empty() {
            add(trie, word).context(DictionaryRead { path })?;
        }
    }
    Ok(())
}

/// Build the dictionary trie from the word lists given in the arguments.
fn load_trie(args: &Args) -> Result<Trie> {
    let mut trie = Trie::from_reader(open(&args.dict_path)?).context(DictionaryRead {
        path: &args.dict_path,
    })?;

    for path in &args.noun_paths {
        add_word_list(&mut trie, path, Trie::add_regular_noun)?;
    }
    for path in &args.verb_paths {
        add_word_list(&mut trie, path, Trie::add_regular_verb)?;
    }

    Ok(trie)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let trie = load_trie(&args)?;
    info!(
        "Loaded {} words from {}",
        trie.len(),
        args.dict_path.display()
    );

    query::process_stdin_queries(&Solver::new(&trie))
}
