mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board, available_moves, empty_board, is_full};
pub use bot_controller::{BOT_MARK, find_best_move};
pub use game_state::GameState;
pub use types::{GameOutcome, Mark};
pub use win_detector::{WIN_LINES, WinLine, WinningLine, check_win, check_win_with_line, classify};
