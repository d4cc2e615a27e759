//! Exhaustive minimax search with memoization.

use super::cache::ScoreCache;
use super::score::Score;
use crate::game::{BOARD_LEN, Board, Coord, Player};
use tracing::{debug, instrument};

/// The computer opponent.
///
/// Scores positions by exhaustive minimax over the remaining game tree:
/// [`Player::Ai`] maximizes the terminal [`Score`] and [`Player::Human`]
/// minimizes it. Scores are memoized in a [`ScoreCache`] owned by this
/// instance, so repeated queries over the course of a game each cost at
/// most one tree walk.
///
/// The search is a pure recursion with no I/O: every call strictly
/// decreases the number of empty cells, so depth is bounded by 9.
#[derive(Debug, Default)]
pub struct AiPlayer {
    cache: ScoreCache,
}

impl AiPlayer {
    /// Creates an engine with an empty memo table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the memo table.
    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    /// The terminal score of `board` with `to_move` to play, assuming
    /// both sides play optimally from here on.
    #[instrument(skip(self, board))]
    pub fn score(&mut self, board: &Board, to_move: Player) -> Score {
        if let Some(winner) = board.winner() {
            // A finished board's value ignores who would nominally move next.
            let score = Score::for_winner(winner);
            self.cache.record(*board, to_move, score);
            return score;
        }

        let open = board.empty_cells();
        if open.is_empty() {
            // Nobody can move and there is no winner: stalemate.
            return Score::Draw;
        }
        if open.len() >= BOARD_LEN * BOARD_LEN - 1 {
            // 3x3-specific fact: perfect play from an empty or one-move
            // board is a forced draw, so the widest levels of the tree
            // never need searching. Invalid for any other board size.
            return Score::Draw;
        }
        if let Some(score) = self.cache.get(board, to_move) {
            return score;
        }

        let score = match to_move {
            Player::Ai => self.maximize(board, &open),
            Player::Human => self.minimize(board, &open),
        };
        self.cache.record(*board, to_move, score);
        score
    }

    /// The first move, in row-major order, whose resulting position
    /// scores as well for `to_move` as this position itself.
    ///
    /// Deterministic by construction; ties between equally good moves
    /// always resolve to the earliest cell.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell: asking a finished board
    /// for a move is a caller bug.
    #[instrument(skip(self, board))]
    pub fn best_move(&mut self, board: &Board, to_move: Player) -> Coord {
        let open = board.empty_cells();
        assert!(!open.is_empty(), "no moves remain on a finished board");

        let target = self.score(board, to_move);
        for &coord in &open {
            if self.score_after(board, coord, to_move) == target {
                debug!(%coord, ?target, "optimal move found");
                return coord;
            }
        }
        unreachable!("some move must attain the position's own minimax score")
    }

    /// Scores the position handed to the opponent after `player` moves
    /// at `coord`.
    fn score_after(&mut self, board: &Board, coord: Coord, player: Player) -> Score {
        let next = board.apply_move(coord, player);
        self.score(&next, player.opponent())
    }

    /// Best child score for the maximizer, stopping early once a forced
    /// computer win appears.
    fn maximize(&mut self, board: &Board, open: &[Coord]) -> Score {
        let mut best = Score::HumanWin;
        for &coord in open {
            let score = self.score_after(board, coord, Player::Ai);
            if score == Score::AiWin {
                return Score::AiWin;
            }
            best = best.max(score);
        }
        best
    }

    /// Best child score for the minimizer, stopping early once a forced
    /// human win appears.
    fn minimize(&mut self, board: &Board, open: &[Coord]) -> Score {
        let mut best = Score::AiWin;
        for &coord in open {
            let score = self.score_after(board, coord, Player::Human);
            if score == Score::HumanWin {
                return Score::HumanWin;
            }
            best = best.min(score);
        }
        best
    }
}
