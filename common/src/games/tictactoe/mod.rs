mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, BoardError, CENTER, CORNERS, SIDES};
pub use bot_controller::{BotInput, select_move};
pub use game_state::{BOT_MARK, PLAYER_MARK, TicTacToeGameState, TicTacToeMode};
pub use types::{GameOutcome, Mark, WIN_LINES, WinLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
