use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum GameType {
    TicTacToe,
    RockPaperScissors,
    MemoryMatch,
}
