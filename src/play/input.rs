//! Free-text coordinate input for the human player.
//!
//! All user-input validation lives here: coordinates handed back by
//! [`prompt_move`] are safe to pass to the board's asserting
//! `apply_move`.

use crate::game::{Board, Coord};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Why a line of input was rejected.
///
/// The display text doubles as the reprompt shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// No coordinate pair could be extracted from the text.
    #[display("I cannot parse your move into coordinates, try again")]
    Unparseable,
    /// The coordinates point off the board.
    #[display("Previous move was off the board, try again")]
    OutOfBounds,
    /// The targeted square is already taken.
    #[display("Previous move was in an occupied place, try again")]
    Occupied,
}

impl std::error::Error for MoveRejection {}

/// Extracts two board indices from free-form text.
///
/// Tries to be flexible: any text containing two runs of digits parses
/// ("1 2", "(1,2)", "row 1 col 2"), and a single two-digit run parses
/// positionally ("12" reads as row 1, column 2).
pub fn parse_coordinate_pair(input: &str) -> Option<(usize, usize)> {
    let runs: Vec<&str> = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect();

    match runs.as_slice() {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?)),
        [a] if a.len() == 2 => {
            let n: usize = a.parse().ok()?;
            Some((n / 10, n % 10))
        }
        _ => None,
    }
}

/// Checks a parsed pair against the board.
fn validate(board: &Board, pair: Option<(usize, usize)>) -> Result<Coord, MoveRejection> {
    let (row, col) = pair.ok_or(MoveRejection::Unparseable)?;
    let coord = Coord::new(row, col);
    if !board.is_in_bounds(coord) {
        return Err(MoveRejection::OutOfBounds);
    }
    if board.is_occupied(coord) {
        return Err(MoveRejection::Occupied);
    }
    Ok(coord)
}

/// Prompts until the reader produces a legal move for `board`.
///
/// Malformed or illegal input is answered with the rejection message and
/// another read; the loop only ends with a legal coordinate or an
/// exhausted reader.
pub fn prompt_move<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    board: &Board,
) -> Result<Coord> {
    writeln!(writer, "Please enter your move")?;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before a move was entered");
        }
        match validate(board, parse_coordinate_pair(&line)) {
            Ok(coord) => {
                debug!(%coord, "accepted human move");
                return Ok(coord);
            }
            Err(rejection) => writeln!(writer, "{rejection}")?,
        }
    }
}
