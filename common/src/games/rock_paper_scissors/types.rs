#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RpsMove {
    Rock,
    Paper,
    Scissors,
}

impl RpsMove {
    pub const ALL: [RpsMove; 3] = [RpsMove::Rock, RpsMove::Paper, RpsMove::Scissors];

    pub fn defeats(&self) -> RpsMove {
        match self {
            RpsMove::Rock => RpsMove::Scissors,
            RpsMove::Paper => RpsMove::Rock,
            RpsMove::Scissors => RpsMove::Paper,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RpsMove::Rock => "Rock",
            RpsMove::Paper => "Paper",
            RpsMove::Scissors => "Scissors",
        }
    }
}

/// Judged from the human player's side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundResult {
    Tie,
    PlayerWins,
    ComputerWins,
}

impl RoundResult {
    pub fn judge(player: RpsMove, computer: RpsMove) -> Self {
        if player == computer {
            RoundResult::Tie
        } else if player.defeats() == computer {
            RoundResult::PlayerWins
        } else {
            RoundResult::ComputerWins
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Round {
    pub player_move: RpsMove,
    pub computer_move: RpsMove,
    pub result: RoundResult,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Scores {
    pub player: u32,
    pub computer: u32,
}
