//! Minimax search over board positions.

pub mod cache;
pub mod minimax;
pub mod score;

pub use cache::ScoreCache;
pub use minimax::AiPlayer;
pub use score::Score;
