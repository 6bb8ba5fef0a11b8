mod game_state;
mod types;

pub use game_state::RockPaperScissorsGameState;
pub use types::{Round, RoundResult, RpsMove, Scores};
