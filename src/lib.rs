//! Terminal tic-tac-toe with an exhaustive, memoized minimax opponent.
//!
//! The crate splits into an immutable board model ([`game`]), a search
//! engine that computes optimal play over it ([`engine`]), and the thin
//! terminal glue that hosts a human against the engine ([`play`]).
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{AiPlayer, Board, Player, Score};
//!
//! let mut engine = AiPlayer::new();
//! // Perfect play from the empty board is a forced draw.
//! assert_eq!(engine.score(&Board::new(), Player::Ai), Score::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod engine;
pub mod game;
pub mod play;

// Crate-level exports - board model
pub use game::{BOARD_LEN, Board, Coord, Player, Square};

// Crate-level exports - search engine
pub use engine::{AiPlayer, Score, ScoreCache};

// Crate-level exports - terminal glue
pub use play::FirstMover;
