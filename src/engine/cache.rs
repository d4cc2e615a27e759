//! Write-once memo table for position scores.

use super::score::Score;
use crate::game::{Board, Player};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Memoized scores keyed by board contents and the player to move.
///
/// Keying on the `(Board, Player)` pair works because `Board` equality
/// and hashing are structural: two boards with the same contents hit the
/// same entry no matter how they were reached.
///
/// Entries are write-once per key. A position's game-theoretic value
/// never changes, so recording a different value for a known key is a
/// logic error in the engine and fails fast rather than silently
/// overwriting.
#[derive(Debug, Default)]
pub struct ScoreCache {
    scores: HashMap<(Board, Player), Score>,
}

impl ScoreCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a previously recorded score.
    pub fn get(&self, board: &Board, to_move: Player) -> Option<Score> {
        self.scores.get(&(*board, to_move)).copied()
    }

    /// Records a score, verifying consistency against any existing entry.
    ///
    /// # Panics
    ///
    /// Panics if the key is already present with a different score.
    pub fn record(&mut self, board: Board, to_move: Player, score: Score) {
        match self.scores.entry((board, to_move)) {
            Entry::Occupied(entry) => assert_eq!(
                *entry.get(),
                score,
                "memoized score changed for {board:?} with {to_move:?} to move"
            ),
            Entry::Vacant(entry) => {
                entry.insert(score);
            }
        }
    }

    /// Number of memoized positions.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True iff nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
