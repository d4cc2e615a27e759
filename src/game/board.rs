//! Immutable board value type.

use super::rules;
use super::types::{Coord, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_LEN: usize = 3;

/// A snapshot of a 3x3 tic-tac-toe position.
///
/// Boards are plain values: applying a move derives a new `Board` and
/// leaves the original untouched. Equality and hashing are structural,
/// which lets the search engine key its memo table on board contents
/// rather than on any particular move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [[Square; BOARD_LEN]; BOARD_LEN],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_LEN]; BOARD_LEN],
        }
    }

    /// Builds a board from explicit rows, for mid-game positions.
    pub fn from_squares(squares: [[Square; BOARD_LEN]; BOARD_LEN]) -> Self {
        Self { squares }
    }

    /// Returns the square at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    pub fn get(&self, coord: Coord) -> Square {
        assert!(
            self.is_in_bounds(coord),
            "coordinate {coord} is off the board"
        );
        self.squares[coord.row][coord.col]
    }

    /// Returns all squares as rows.
    pub fn squares(&self) -> &[[Square; BOARD_LEN]; BOARD_LEN] {
        &self.squares
    }

    /// True iff both indices lie in `[0, BOARD_LEN)`.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < BOARD_LEN && coord.col < BOARD_LEN
    }

    /// True iff the square at `coord` is taken.
    ///
    /// `coord` must be in bounds.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord) != Square::Empty
    }

    /// All empty coordinates in row-major order.
    ///
    /// The order is load-bearing: the engine's "first optimal move"
    /// tie-break follows it.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for row in 0..BOARD_LEN {
            for col in 0..BOARD_LEN {
                if self.squares[row][col] == Square::Empty {
                    cells.push(Coord::new(row, col));
                }
            }
        }
        cells
    }

    /// Derives a new board with `player`'s mark at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board or already taken. Both indicate
    /// a caller bug: user input is validated in the prompt loop before it
    /// reaches this method.
    #[instrument(skip(self))]
    pub fn apply_move(&self, coord: Coord, player: Player) -> Board {
        assert!(self.is_in_bounds(coord), "move {coord} is off the board");
        assert!(
            !self.is_occupied(coord),
            "move {coord} targets an occupied square"
        );
        let mut squares = self.squares;
        squares[coord.row][coord.col] = Square::Taken(player);
        Board { squares }
    }

    /// The player holding a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::win::winner_on(self)
    }

    /// True iff no square is empty.
    pub fn is_full(&self) -> bool {
        rules::draw::is_full(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for square in row {
                let glyph = match square {
                    Square::Empty => '_',
                    Square::Taken(player) => player.glyph(),
                };
                write!(f, "{glyph}|")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::new()
            .apply_move(Coord::new(0, 0), Player::Ai)
            .apply_move(Coord::new(1, 1), Player::Human);
        let expected = vec![
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 0),
            Coord::new(1, 2),
            Coord::new(2, 0),
            Coord::new(2, 1),
            Coord::new(2, 2),
        ];
        assert_eq!(board.empty_cells(), expected);
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let before = Board::new();
        let after = before.apply_move(Coord::new(1, 1), Player::Ai);
        assert!(!before.is_occupied(Coord::new(1, 1)));
        assert!(after.is_occupied(Coord::new(1, 1)));
        assert_ne!(before, after);
    }

    #[test]
    fn test_bounds() {
        let board = Board::new();
        assert!(board.is_in_bounds(Coord::new(0, 0)));
        assert!(board.is_in_bounds(Coord::new(2, 2)));
        assert!(!board.is_in_bounds(Coord::new(3, 0)));
        assert!(!board.is_in_bounds(Coord::new(0, 3)));
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_apply_move_to_occupied_square_panics() {
        let board = Board::new().apply_move(Coord::new(0, 0), Player::Ai);
        board.apply_move(Coord::new(0, 0), Player::Human);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_apply_move_out_of_bounds_panics() {
        Board::new().apply_move(Coord::new(3, 3), Player::Ai);
    }

    #[test]
    fn test_display_glyphs() {
        let board = Board::new()
            .apply_move(Coord::new(0, 0), Player::Ai)
            .apply_move(Coord::new(1, 1), Player::Human);
        assert_eq!(board.to_string(), "|O|_|_|\n|_|X|_|\n|_|_|_|");
    }
}
