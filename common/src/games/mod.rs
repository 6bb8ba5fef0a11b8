mod session_rng;

pub mod memory_match;
pub mod rock_paper_scissors;
pub mod tictactoe;

pub use session_rng::{CandidatePicker, SessionRng};
