//! Draw detection logic.

use crate::game::board::Board;
use crate::game::types::Square;

/// Checks if the board is full (all squares taken).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board
        .squares()
        .iter()
        .flatten()
        .all(|s| *s != Square::Empty)
}
