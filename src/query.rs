use crate::error::*;
use snafu::*;
use wordament_solver_core::{Grid, Score, Sequence, Solver};

type Json = String;

/// The character separating a card from its score in a cell (`qu:9`).
const SCORE_SEPARATOR: char = ':';

/// Split a cell into its card and its optional score.
fn parse_cell<'l>(cell: &'l str, line: &str) -> Result<(&'l str, Option<Score>)> {
    match cell.rsplit_once(SCORE_SEPARATOR) {
        None => Ok((cell, None)),
        Some((card, score)) => {
            let score = score.parse().ok().context(GridParse {
                line,
                cause: "Could not parse the score into an integer",
            })?;
            Ok((card, Some(score)))
        }
    }
}

/// Parse a grid row of whitespace-separated cells.
fn parse_row(line: &str) -> Result<(Vec<&str>, Vec<Option<Score>>)> {
    let mut cards = Vec::new();
    let mut scores = Vec::new();
    for cell in line.split_whitespace() {
        let (card, score) = parse_cell(cell, line)?;
        cards.push(card);
        scores.push(score);
    }
    Ok((cards, scores))
}

/// Parse the rows of a grid, with the scores of its cells if they all have one.
fn parse_grid<S: AsRef<str>>(lines: &[S]) -> Result<Grid> {
    let mut cards = Vec::with_capacity(lines.len());
    let mut scores = Vec::with_capacity(lines.len());
    for line in lines {
        let (row_cards, row_scores) = parse_row(line.as_ref())?;
        cards.push(row_cards);
        scores.push(row_scores);
    }

    let grid = Grid::new(&cards).context(InvalidGrid)?;

    let nb_scored = scores.iter().flatten().filter(|s| s.is_some()).count();
    if nb_scored == 0 {
        return Ok(grid);
    }
    ensure!(nb_scored == grid.len(), MixedScores);

    let scores: Vec<Vec<Score>> = scores
        .into_iter()
        .map(|row| row.into_iter().flatten().collect())
        .collect();
    grid.with_scores(&scores).context(InvalidGrid)
}

/// Format a found sequence to JSON and append it to the given buffer.
fn append_result_to_json(sequence: &Sequence, json_buffer: &mut Json) {
    // Add to the buffer: {"word":"<word>","value":<value>,"path":[[<row>,<col>],...]}
    // Do not use format!() to avoid its overhead
    // Uses raw string literals: https://doc.rust-lang.org/reference/tokens.html#raw-string-literals
    json_buffer.push('{');
    json_buffer.push_str(r#""word":""#);
    json_buffer.push_str(&sequence.word);
    json_buffer.push_str(r#"","value":"#);
    json_buffer.push_str(&sequence.value.to_string());
    json_buffer.push_str(r#","path":["#);
    for (i, pos) in sequence.path.iter().enumerate() {
        if i != 0 {
            json_buffer.push(',');
        }
        json_buffer.push('[');
        json_buffer.push_str(&pos.row.to_string());
        json_buffer.push(',');
        json_buffer.push_str(&pos.col.to_string());
        json_buffer.push(']');
    }
    json_buffer.push_str("]}");
}

/// Solve a grid and return the result in a JSON representation.
fn process_grid<S: AsRef<str>>(
    solver: &Solver,
    lines: &[S],
    mut json_buffer: Json,
) -> Result<Json> {
    let grid = parse_grid(lines)?;
    let result = solver.solve(&grid);

    // Clear the buffer of its old data
    json_buffer.clear();

    json_buffer.push('[');
    for sequence in &result {
        append_result_to_json(sequence, &mut json_buffer);

        // Add comma between elements in the JSON array
        json_buffer.push(',');
    }
    // Remove the invalid trailing comma from the JSON array
    if !result.is_empty() {
        json_buffer.pop();
    }
    json_buffer.push(']');

    Ok(json_buffer)
}

/// Display the JSON result in the [standard output stream](std::io::stdout)
fn display_json_result(json_buffer: &str) {
    println!("{}", json_buffer);
}

/// Solve the pending grid, if any, and display its result or its error.
fn flush_grid(solver: &Solver, lines: &mut Vec<String>, json_buffer: &mut Json) {
    if lines.is_empty() {
        return;
    }

    match process_grid(solver, &lines[..], std::mem::take(json_buffer)) {
        Ok(json) => {
            display_json_result(&json);
            *json_buffer = json;
        }
        Err(e) => eprintln!("> {}", e),
    }
    lines.clear();
}

/// Process grids received in the [standard input stream](std::io::stdin).
///
/// A grid is a block of rows, one per line, ended by an empty line or the end of the stream.
pub fn process_stdin_queries(solver: &Solver) -> Result<()> {
    const LINE_CAP: usize = 30;
    const GRID_ROWS_CAP: usize = 4;
    const JSON_BUFFER_CAP: usize = 4096;

    // Initialize all buffers used to reduce allocation overhead
    let mut line = String::with_capacity(LINE_CAP);
    let mut grid_lines = Vec::with_capacity(GRID_ROWS_CAP);
    let mut json_buffer = Json::with_capacity(JSON_BUFFER_CAP);

    let input_stream = std::io::stdin();
    loop {
        line.clear();
        match input_stream.read_line(&mut line) {
            Ok(0) => {
                // EOF reached
                flush_grid(solver, &mut grid_lines, &mut json_buffer);
                return Ok(());
            }
            Ok(_) => {
                let row = line.trim();
                if row.is_empty() {
                    flush_grid(solver, &mut grid_lines, &mut json_buffer);
                } else {
                    grid_lines.push(row.to_string());
                }
            }
            Err(e) => Err(e).context(Stdin)?,
        }
    }
}
