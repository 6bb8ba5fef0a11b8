use crate::games::CandidatePicker;
use super::board::{BOARD_SIZE, Board};
use super::bot_controller::{BotInput, select_move};
use super::types::{GameOutcome, Mark, WinLine};
use super::win_detector::evaluate;

pub const PLAYER_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeMode {
    /// Human plays X and moves first, the bot answers with O.
    VsBot,
    /// Two humans take turns on the same device.
    Local,
}

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: TicTacToeMode,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: TicTacToeMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: Mark::X,
            outcome: GameOutcome::Ongoing,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<GameOutcome, String> {
        if self.outcome.is_terminal() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.outcome = evaluate(&self.board);

        if !self.outcome.is_terminal() {
            self.switch_turn();
        }

        Ok(self.outcome)
    }

    /// Lets the bot answer when it holds the turn. `Ok(None)` means the
    /// selector found no free cell.
    pub fn play_bot_turn<P: CandidatePicker>(&mut self, picker: &mut P) -> Result<Option<usize>, String> {
        if self.mode != TicTacToeMode::VsBot {
            return Err("No bot in a local game".to_string());
        }

        if !self.is_bot_turn() {
            return Err("Not the bot's turn".to_string());
        }

        let input = BotInput::new(self.board, BOT_MARK);
        let Some(index) = select_move(&input, picker) else {
            return Ok(None);
        };

        self.place_mark(BOT_MARK, index)?;
        Ok(Some(index))
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == TicTacToeMode::VsBot
            && self.current_mark == BOT_MARK
            && !self.outcome.is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        match self.outcome {
            GameOutcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
