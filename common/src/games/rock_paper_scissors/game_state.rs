use crate::games::CandidatePicker;
use super::types::{Round, RoundResult, RpsMove, Scores};

#[derive(Debug, Default)]
pub struct RockPaperScissorsGameState {
    scores: Scores,
    last_round: Option<Round>,
    rounds_played: u32,
}

impl RockPaperScissorsGameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the computer's move uniformly and scores the round. `ALL` is
    /// never empty, so an error means the picker broke its contract; the
    /// round is then not counted.
    pub fn play_round<P: CandidatePicker>(
        &mut self,
        player_move: RpsMove,
        picker: &mut P,
    ) -> Result<Round, String> {
        let Some(computer_move) = picker.pick(&RpsMove::ALL) else {
            return Err("Picker returned no move".to_string());
        };
        let result = RoundResult::judge(player_move, computer_move);

        match result {
            RoundResult::PlayerWins => self.scores.player += 1,
            RoundResult::ComputerWins => self.scores.computer += 1,
            RoundResult::Tie => {}
        }

        let round = Round {
            player_move,
            computer_move,
            result,
        };
        self.last_round = Some(round);
        self.rounds_played += 1;
        Ok(round)
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
