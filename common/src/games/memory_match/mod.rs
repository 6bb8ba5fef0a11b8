mod game_state;
mod types;

pub use game_state::MemoryMatchGameState;
pub use types::{CARD_COUNT, Card, FlipOutcome, GameStatus, Icon, PAIR_COUNT};
