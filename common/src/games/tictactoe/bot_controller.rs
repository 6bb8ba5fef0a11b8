use crate::games::CandidatePicker;
use super::board::{Board, CENTER, CORNERS, SIDES};
use super::types::Mark;
use super::win_detector::check_win;

/// Corner held by the player, then the corner the bot answers with.
const OPPOSITE_CORNERS: [(usize, usize); 4] = [(0, 8), (8, 0), (2, 6), (6, 2)];

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

/// Picks the automated player's next cell.
///
/// Rules in priority order: win now, block the player's win, take the
/// center, answer a player corner with its opposite, any free corner, any
/// free side. Ties among corners or sides go through `picker`. Returns
/// `None` on a full board or when `bot_mark` is [`Mark::Empty`].
pub fn select_move<P: CandidatePicker>(input: &BotInput, picker: &mut P) -> Option<usize> {
    let board = &input.board;
    let bot_mark = input.bot_mark;
    let player_mark = bot_mark.opponent()?;
    let available_moves = board.empty_cells();

    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(board, bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, player_mark, &available_moves) {
        return Some(index);
    }

    if board.is_empty(CENTER) {
        return Some(CENTER);
    }

    if let Some(index) = find_opposite_corner(board, player_mark) {
        return Some(index);
    }

    pick_empty(board, &CORNERS, picker).or_else(|| pick_empty(board, &SIDES, picker))
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| check_win(&board.with_mark(index, mark)) == Some(mark))
}

fn find_opposite_corner(board: &Board, player_mark: Mark) -> Option<usize> {
    OPPOSITE_CORNERS
        .iter()
        .find(|&&(held, answer)| board.get(held) == Some(player_mark) && board.is_empty(answer))
        .map(|&(_, answer)| answer)
}

fn pick_empty<P: CandidatePicker>(board: &Board, cells: &[usize], picker: &mut P) -> Option<usize> {
    let empty: Vec<usize> = cells.iter().copied().filter(|&i| board.is_empty(i)).collect();
    picker.pick(&empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::games::SessionRng;
    use crate::games::tictactoe::{GameOutcome, evaluate};

    struct FirstCandidate;

    impl CandidatePicker for FirstCandidate {
        fn pick_index(&mut self, len: usize) -> Option<usize> {
            if len == 0 { None } else { Some(0) }
        }
    }

    struct LastCandidate;

    impl CandidatePicker for LastCandidate {
        fn pick_index(&mut self, len: usize) -> Option<usize> {
            len.checked_sub(1)
        }
    }

    fn bot_move(board: &str) -> Option<usize> {
        let input = BotInput::new(Board::parse(board).unwrap(), Mark::O);
        select_move(&input, &mut FirstCandidate)
    }

    #[test]
    fn test_empty_board_takes_center() {
        assert_eq!(select_move(&BotInput::new(Board::new(), Mark::O), &mut SessionRng::new(1)), Some(4));
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // X threatens 2, O completes the middle row at 5 instead.
        assert_eq!(bot_move("XX./OO./X.."), Some(5));
    }

    #[test]
    fn test_first_winning_cell_in_index_order() {
        // O can win at 2 (top row) or at 6 (left column).
        assert_eq!(bot_move("OO./OX./.XX"), Some(2));
    }

    #[test]
    fn test_blocks_player_win() {
        // X threatens 2 on the top row and O has no win.
        assert_eq!(bot_move("XX./.O./..."), Some(2));
    }

    #[test]
    fn test_blocks_first_threat_in_index_order() {
        // X threatens both 2 and 6; only one can be blocked.
        assert_eq!(bot_move("XX./XO./..O"), Some(2));
    }

    #[test]
    fn test_takes_opposite_corner_of_player() {
        assert_eq!(bot_move("X../.O./..."), Some(8));
        assert_eq!(bot_move("..X/.O./..."), Some(6));
        assert_eq!(bot_move(".../.O./X.."), Some(2));
        assert_eq!(bot_move(".../.O./..X"), Some(0));
    }

    #[test]
    fn test_opposite_corner_check_order() {
        // X holds 0 and 2 with O blocking the row, 8 is answered first.
        assert_eq!(bot_move("XOX/.O./.X."), Some(8));
    }

    #[test]
    fn test_empty_corner_goes_through_picker() {
        // X on the center, no corner held by X: any free corner.
        let board = Board::parse(".../.X./...").unwrap();
        let input = BotInput::new(board, Mark::O);
        assert_eq!(select_move(&input, &mut FirstCandidate), Some(0));
        assert_eq!(select_move(&input, &mut LastCandidate), Some(8));

        let mut rng = SessionRng::new(9);
        for _ in 0..50 {
            let picked = select_move(&input, &mut rng).unwrap();
            assert!(CORNERS.contains(&picked));
        }
    }

    #[test]
    fn test_corner_rules_run_before_sides() {
        // Player corner 0 with 8 free: the opposite corner wins over sides.
        assert_eq!(bot_move("XOX/.O./OX."), Some(8));
    }

    #[test]
    fn test_block_on_last_sides() {
        // Only 3 and 5 are left; X threatens 5 on the right column.
        assert_eq!(bot_move("XOX/.O./OXX"), Some(5));
    }

    #[test]
    fn test_empty_side_goes_through_picker() {
        // Corners full, no threats either way.
        let board = Board::parse("OXO/.X./XOX").unwrap();
        let input = BotInput::new(board, Mark::O);
        assert_eq!(select_move(&input, &mut FirstCandidate), Some(3));
        assert_eq!(select_move(&input, &mut LastCandidate), Some(5));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::parse("XOX/XOO/OXX").unwrap();
        assert_eq!(evaluate(&board), GameOutcome::Draw);
        assert_eq!(select_move(&BotInput::new(board, Mark::O), &mut FirstCandidate), None);
    }

    #[test]
    fn test_empty_bot_mark_has_no_move() {
        assert_eq!(select_move(&BotInput::new(Board::new(), Mark::Empty), &mut FirstCandidate), None);
    }

    #[test]
    fn test_bot_can_play_x() {
        // X completes the anti-diagonal at 2, which also stops O.
        let board = Board::parse("OO./.X./X..").unwrap();
        assert_eq!(select_move(&BotInput::new(board, Mark::X), &mut FirstCandidate), Some(2));
    }

    #[test]
    fn test_end_to_end_center_then_opposite_corner() {
        let mut board = Board::new();
        let first = select_move(&BotInput::new(board, Mark::O), &mut FirstCandidate).unwrap();
        assert_eq!(first, 4);
        board.set(first, Mark::O);
        board.set(0, Mark::X);
        let second = select_move(&BotInput::new(board, Mark::O), &mut FirstCandidate).unwrap();
        assert_eq!(second, 8);
    }

    fn all_reachable_boards(board: Board, to_move: Mark, out: &mut HashSet<(Board, Mark)>) {
        if evaluate(&board).is_terminal() || !out.insert((board, to_move)) {
            return;
        }
        let next = to_move.opponent().unwrap();
        for index in board.empty_cells() {
            all_reachable_boards(board.with_mark(index, to_move), next, out);
        }
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let mut boards = HashSet::new();
        all_reachable_boards(Board::new(), Mark::X, &mut boards);
        let mut rng = SessionRng::new(11);
        for (board, to_move) in boards {
            let index = select_move(&BotInput::new(board, to_move), &mut rng).unwrap();
            assert!(board.is_empty(index), "{:?} -> {}", board, index);
        }
    }
}
