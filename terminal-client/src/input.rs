use common::games::memory_match::CARD_COUNT;
use common::games::rock_paper_scissors::RpsMove;
use common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeCommand {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpsCommand {
    Play(RpsMove),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryMatchCommand {
    /// Zero-based card index.
    Flip(usize),
    Reset,
    Quit,
}

pub fn parse_tictactoe_command(line: &str) -> Result<TicTacToeCommand, String> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "r" | "reset" => Ok(TicTacToeCommand::Reset),
        "q" | "quit" => Ok(TicTacToeCommand::Quit),
        other => parse_slot(other, BOARD_SIZE).map(TicTacToeCommand::Place),
    }
}

pub fn parse_rps_command(line: &str) -> Result<RpsCommand, String> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "r" | "rock" => Ok(RpsCommand::Play(RpsMove::Rock)),
        "p" | "paper" => Ok(RpsCommand::Play(RpsMove::Paper)),
        "s" | "scissors" => Ok(RpsCommand::Play(RpsMove::Scissors)),
        "reset" => Ok(RpsCommand::Reset),
        "q" | "quit" => Ok(RpsCommand::Quit),
        other => Err(format!("Unknown move '{}', use r, p, s, reset or q", other)),
    }
}

pub fn parse_memory_match_command(line: &str) -> Result<MemoryMatchCommand, String> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "r" | "reset" => Ok(MemoryMatchCommand::Reset),
        "q" | "quit" => Ok(MemoryMatchCommand::Quit),
        other => parse_slot(other, CARD_COUNT).map(MemoryMatchCommand::Flip),
    }
}

/// Reads a one-based slot number as shown to the user.
fn parse_slot(input: &str, count: usize) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(slot) if (1..=count).contains(&slot) => Ok(slot - 1),
        _ => Err(format!("Enter a number from 1 to {}", count)),
    }
}
