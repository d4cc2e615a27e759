//! Game-theoretic position values.

use crate::game::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a position under optimal play from both sides.
///
/// Values sit on a fixed Ai-favorable scale: [`Score::HumanWin`] is -1,
/// [`Score::Draw`] is 0, [`Score::AiWin`] is +1. The derived ordering
/// (`HumanWin < Draw < AiWin`) is exactly what the maximizer maximizes
/// and the minimizer minimizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Score {
    /// The human forces a win (-1).
    HumanWin,
    /// Neither side can do better than a draw (0).
    Draw,
    /// The computer forces a win (+1).
    AiWin,
}

impl Score {
    /// The score of a finished board won by `player`.
    pub fn for_winner(player: Player) -> Self {
        match player {
            Player::Ai => Score::AiWin,
            Player::Human => Score::HumanWin,
        }
    }
}
