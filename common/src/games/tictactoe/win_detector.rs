use super::board::Board;
use super::types::{GameOutcome, Mark, WIN_LINES, WinLine};

/// Scores a board snapshot. The first completed line in [`WIN_LINES`]
/// order is reported; a full board without one is a draw.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return GameOutcome::Win { mark, line };
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line.cells();
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some((mark, line));
        }
    }
    None
}
