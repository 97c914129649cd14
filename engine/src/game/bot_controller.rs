use super::board::{Board, available_moves, is_full};
use super::types::Mark;
use super::win_detector::check_win;

/// The computer always plays O, the maximizing side of the search.
pub const BOT_MARK: Mark = Mark::O;

const WIN_SCORE: i32 = 10;

/// Picks the cell with the highest full-depth minimax score, trying empty
/// cells in ascending index order. Ties keep the earliest cell. Returns
/// `None` only when the board has no empty cell left; callers treat that
/// as "no move", not as an error.
pub fn find_best_move(board: &Board) -> Option<usize> {
    let mut board = *board;
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for cell in available_moves(&board) {
        board[cell] = BOT_MARK;
        let score = minimax(&mut board, 0, false);
        board[cell] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

/// Exhaustive search to the bottom of the board. The depth term biases the
/// score so a faster win outranks a slower one and a slower loss outranks a
/// faster one; it is not a depth limit. Exploration places a mark, recurses
/// and clears the cell again, leaving the board as it was.
fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == BOT_MARK {
            WIN_SCORE - depth as i32
        } else {
            depth as i32 - WIN_SCORE
        };
    }

    if is_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for cell in 0..board.len() {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = BOT_MARK;
            best = best.max(minimax(board, depth + 1, false));
            board[cell] = Mark::Empty;
        }
        best
    } else {
        let opponent = Mark::X;
        let mut best = i32::MAX;
        for cell in 0..board.len() {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = opponent;
            best = best.min(minimax(board, depth + 1, true));
            board[cell] = Mark::Empty;
        }
        best
    }
}
