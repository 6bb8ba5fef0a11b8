use clap::ValueEnum;
use common::config::Validate;
use common::games::tictactoe::TicTacToeMode;
use serde::{Deserialize, Serialize};

use super::MAX_DELAY_MS;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum TicTacToeOpponent {
    /// Play against the computer.
    Ai,
    /// Two players on this device.
    Local,
}

impl From<TicTacToeOpponent> for TicTacToeMode {
    fn from(opponent: TicTacToeOpponent) -> Self {
        match opponent {
            TicTacToeOpponent::Ai => TicTacToeMode::VsBot,
            TicTacToeOpponent::Local => TicTacToeMode::Local,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub opponent: TicTacToeOpponent,
    pub bot_name: String,
    pub bot_think_delay_ms: u64,
    /// Name for O in a local game.
    pub second_player_name: String,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_name.trim().is_empty() {
            return Err("bot_name must not be empty".to_string());
        }
        if self.second_player_name.trim().is_empty() {
            return Err("second_player_name must not be empty".to_string());
        }
        if self.bot_think_delay_ms > MAX_DELAY_MS {
            return Err(format!("bot_think_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            opponent: TicTacToeOpponent::Ai,
            bot_name: "Computer".to_string(),
            bot_think_delay_ms: 500,
            second_player_name: "Player 2".to_string(),
        }
    }
}
