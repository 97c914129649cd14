use super::board::{Board, is_full};
use super::types::{GameOutcome, Mark};

pub type WinLine = [usize; 3];

/// The 8 winning configurations: three rows, three columns, two diagonals.
/// Enumeration order is fixed so detection stays deterministic.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub line: WinLine,
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|winning| winning.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if board[a] != Mark::Empty && board[a] == board[b] && board[b] == board[c] {
            return Some(WinningLine {
                mark: board[a],
                line,
            });
        }
    }
    None
}

/// A win takes priority over a full board.
pub fn classify(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        return GameOutcome::Win(mark);
    }
    if is_full(board) {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}
