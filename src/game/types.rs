//! Core domain types for the board model.

use serde::{Deserialize, Serialize};

/// A side in the game.
///
/// The computer plays [`Player::Ai`] and maximizes the terminal score;
/// the human plays [`Player::Human`] and minimizes it. Which side opens
/// is decided by the game loop, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The computer opponent (maximizer, rendered as `O`).
    Ai,
    /// The human player (minimizer, rendered as `X`).
    Human,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Ai => Player::Human,
            Player::Human => Player::Ai,
        }
    }

    /// Glyph used when rendering this player's mark.
    pub fn glyph(self) -> char {
        match self {
            Player::Ai => 'O',
            Player::Human => 'X',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    Empty,
    /// Square taken by a player.
    Taken(Player),
}

/// A zero-indexed (row, column) board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
