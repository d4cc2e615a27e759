//! Terminal game loop gluing the board, the engine, and the human.
//!
//! This layer is deliberately thin: it solicits validated coordinates,
//! feeds them to the board, and asks the engine for the computer's
//! moves. All game knowledge stays in [`crate::game`] and
//! [`crate::engine`].

pub mod input;

use crate::engine::AiPlayer;
use crate::game::{Board, Player};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Who takes the opening move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMover {
    /// The human opens.
    Human,
    /// The computer opens.
    Computer,
    /// Flip a coin, as the classic game does.
    Random,
}

impl FirstMover {
    /// Resolves `Random` with the supplied source of randomness.
    fn resolve<R: Rng>(self, rng: &mut R) -> Player {
        match self {
            FirstMover::Human => Player::Human,
            FirstMover::Computer => Player::Ai,
            FirstMover::Random => {
                if rng.gen_bool(0.5) {
                    Player::Human
                } else {
                    Player::Ai
                }
            }
        }
    }
}

/// Runs one game over the given reader and writer.
pub fn run_game<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    first: FirstMover,
) -> Result<()> {
    let opener = first.resolve(&mut rand::thread_rng());
    run_from(reader, writer, opener)
}

/// Runs one game with a fixed opening player.
pub fn run_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    opener: Player,
) -> Result<()> {
    writeln!(
        writer,
        "Welcome. You will enter your moves in ZERO-INDEXED row,column format."
    )?;
    writeln!(
        writer,
        "So (0,0) is the upper left corner and (2,0) the lower left corner."
    )?;
    writeln!(
        writer,
        "You play \"{}\" and move {}.\n",
        Player::Human.glyph(),
        if opener == Player::Human {
            "first"
        } else {
            "second"
        }
    )?;
    info!(?opener, "game starting");

    let mut board = Board::new();
    let mut engine = AiPlayer::new();
    let mut to_move = opener;

    while board.winner().is_none() && !board.empty_cells().is_empty() {
        let coord = match to_move {
            Player::Human => input::prompt_move(reader, writer, &board)?,
            Player::Ai => {
                let coord = engine.best_move(&board, Player::Ai);
                writeln!(writer, "computer has chosen {coord}")?;
                coord
            }
        };
        debug!(?to_move, %coord, "applying move");
        board = board.apply_move(coord, to_move);
        writeln!(writer, "{board}\n")?;
        to_move = to_move.opponent();
    }

    let winner = board.winner();
    info!(?winner, positions_memoized = engine.cache().len(), "game over");
    match winner {
        Some(Player::Ai) => writeln!(writer, "I win!")?,
        Some(Player::Human) => writeln!(writer, "You win. That was not supposed to happen.")?,
        None => writeln!(writer, "We tied. You must be brilliant.")?,
    }
    Ok(())
}
