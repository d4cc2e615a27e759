//! Win detection logic.

use crate::game::board::Board;
use crate::game::types::{Coord, Player, Square};
use tracing::instrument;

/// The eight winning lines, scanned rows first, then columns, then
/// diagonals.
///
/// The scan order doubles as a tie-break: a board holding complete lines
/// of both players is unreachable by legal play, but the first line found
/// still decides the answer.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player holds a complete row, column,
/// or diagonal, `None` otherwise.
#[instrument(skip(board))]
pub fn winner_on(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Taken(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner_on(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .apply_move(Coord::new(0, 0), Player::Ai)
            .apply_move(Coord::new(0, 1), Player::Ai)
            .apply_move(Coord::new(0, 2), Player::Ai);
        assert_eq!(winner_on(&board), Some(Player::Ai));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = Board::new()
            .apply_move(Coord::new(0, 1), Player::Human)
            .apply_move(Coord::new(1, 1), Player::Human)
            .apply_move(Coord::new(2, 1), Player::Human);
        assert_eq!(winner_on(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = Board::new()
            .apply_move(Coord::new(0, 0), Player::Ai)
            .apply_move(Coord::new(1, 1), Player::Ai)
            .apply_move(Coord::new(2, 2), Player::Ai);
        assert_eq!(winner_on(&board), Some(Player::Ai));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .apply_move(Coord::new(0, 2), Player::Human)
            .apply_move(Coord::new(1, 1), Player::Human)
            .apply_move(Coord::new(2, 0), Player::Human);
        assert_eq!(winner_on(&board), Some(Player::Human));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = Board::new()
            .apply_move(Coord::new(0, 0), Player::Ai)
            .apply_move(Coord::new(0, 1), Player::Ai);
        assert_eq!(winner_on(&board), None);
    }

    #[test]
    fn test_scan_order_rows_before_columns() {
        // Unreachable under legal play: full Human column 0 and full Ai
        // row 0 would need disjoint cells, so stack two full rows instead.
        // Row 0 is scanned before row 1.
        let mut board = Board::new();
        for col in 0..3 {
            board = board.apply_move(Coord::new(0, col), Player::Ai);
            board = board.apply_move(Coord::new(1, col), Player::Human);
        }
        assert_eq!(winner_on(&board), Some(Player::Ai));
    }

    #[test]
    fn test_scan_order_among_columns() {
        // Disjoint full columns for each player; column 0 is scanned first.
        let mut board = Board::new();
        for row in 0..3 {
            board = board.apply_move(Coord::new(row, 0), Player::Human);
            board = board.apply_move(Coord::new(row, 2), Player::Ai);
        }
        assert_eq!(winner_on(&board), Some(Player::Human));
    }
}
