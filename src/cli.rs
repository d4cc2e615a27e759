//! Command-line interface.

use crate::play::FirstMover;
use clap::{Parser, ValueEnum};

/// Terminal tic-tac-toe against a perfect minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Play tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who takes the opening move.
    #[arg(long, value_enum, default_value = "random")]
    pub first: FirstArg,
}

/// CLI spelling of the opening-move choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstArg {
    /// You open.
    Human,
    /// The computer opens.
    Computer,
    /// Flip a coin.
    Random,
}

impl From<FirstArg> for FirstMover {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstMover::Human,
            FirstArg::Computer => FirstMover::Computer,
            FirstArg::Random => FirstMover::Random,
        }
    }
}
