mod game_io;
mod memory_match_runner;
mod rock_paper_scissors_runner;
mod tictactoe_runner;

pub use game_io::GameIo;
pub use memory_match_runner::{MemoryMatchSettings, run_memory_match_game};
pub use rock_paper_scissors_runner::run_rock_paper_scissors_game;
pub use tictactoe_runner::{TicTacToeSettings, run_tictactoe_game};
