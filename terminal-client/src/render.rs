use common::games::memory_match::{MemoryMatchGameState, PAIR_COUNT};
use common::games::rock_paper_scissors::{Round, RoundResult, Scores};
use common::games::tictactoe::{GameOutcome, Mark, TicTacToeGameState};

const MEMORY_MATCH_COLUMNS: usize = 4;

pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.o,
            _ => &self.x,
        }
    }
}

/// Free cells show their slot number, winning cells are bracketed.
pub fn render_tictactoe_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let rows: Vec<String> = state
        .board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * 3 + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                        other => other.symbol(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn tictactoe_status(state: &TicTacToeGameState, names: &PlayerNames) -> String {
    match state.outcome {
        GameOutcome::Draw => "It's a Draw!".to_string(),
        GameOutcome::Win { mark, .. } => format!("{} Won!", names.name_of(mark)),
        GameOutcome::Ongoing if state.is_bot_turn() => {
            format!("{} is thinking...", names.name_of(state.current_mark))
        }
        GameOutcome::Ongoing => format!("{}'s Turn", names.name_of(state.current_mark)),
    }
}

pub fn render_rps_round(round: &Round, player_name: &str) -> String {
    let verdict = match round.result {
        RoundResult::Tie => "It's a tie!",
        RoundResult::PlayerWins => "You win this round!",
        RoundResult::ComputerWins => "Computer wins this round!",
    };
    format!(
        "{}: {}  vs  Computer: {}\n{}",
        player_name,
        round.player_move.name(),
        round.computer_move.name(),
        verdict
    )
}

pub fn render_rps_scores(scores: Scores, player_name: &str) -> String {
    format!("{} {} - {} Computer", player_name, scores.player, scores.computer)
}

/// Face-down cards show their slot number, matched cards carry a `*`.
pub fn render_memory_match(state: &MemoryMatchGameState) -> String {
    let cells: Vec<String> = state
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if state.is_matched(index) {
                format!("{:>9}*", card.icon.name())
            } else if state.is_face_up(index) {
                format!("{:>9} ", card.icon.name())
            } else {
                let slot = format!("#{}", index + 1);
                format!("{:>9} ", slot)
            }
        })
        .collect();

    let grid = cells
        .chunks(MEMORY_MATCH_COLUMNS)
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\nMoves: {}  Pairs Found: {} / {}",
        grid,
        state.moves(),
        state.pairs_found(),
        PAIR_COUNT
    )
}
