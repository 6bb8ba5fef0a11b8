mod config;
mod game_type;
mod launch;
mod memory_match_config;
mod tictactoe_config;

pub use config::{Config, get_config_manager, get_default_config_path};
pub use game_type::GameType;
pub use launch::{LaunchOverrides, LaunchPlan, plan_launch};
pub use memory_match_config::MemoryMatchConfig;
pub use tictactoe_config::{TicTacToeConfig, TicTacToeOpponent};

pub const MAX_DELAY_MS: u64 = 5000;
pub const MAX_NAME_LEN: usize = 32;
