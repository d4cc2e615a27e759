//! Win and draw detection.
//!
//! These rules answer geometric questions about a board and hold no
//! game-strategy logic.

pub mod draw;
pub mod win;
