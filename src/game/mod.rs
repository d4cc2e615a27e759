//! The immutable board model.

pub mod board;
pub mod rules;
pub mod types;

pub use board::{BOARD_LEN, Board};
pub use types::{Coord, Player, Square};
