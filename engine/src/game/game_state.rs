use super::board::{BOARD_CELLS, Board, empty_board};
use super::types::{GameOutcome, Mark};
use super::win_detector::{WinningLine, check_win_with_line, classify};

/// Authoritative board plus turn tracking. The outcome is always derived
/// from the board, never stored.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            last_move: None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        classify(&self.board)
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.outcome() != GameOutcome::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if cell >= BOARD_CELLS {
            return Err(format!("Cell {} is out of bounds", cell));
        }

        if self.board[cell] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[cell] = mark;
        self.last_move = Some(cell);

        if self.outcome() == GameOutcome::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    /// Fresh board, X to move again.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_mark = Mark::X;
        self.last_move = None;
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.outcome() {
            GameOutcome::Win(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn status_line(&self) -> String {
        match self.outcome() {
            GameOutcome::Win(mark) => format!("Winner: {}", mark),
            GameOutcome::Draw => "Draw".to_string(),
            GameOutcome::InProgress => format!("Player: {}", self.current_mark),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[(Mark, usize)]) {
        for &(mark, cell) in moves {
            state.place_mark(mark, cell).unwrap();
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.last_move, None);
        assert_eq!(state.status_line(), "Player: X");
    }

    #[test]
    fn test_place_mark_switches_turns() {
        let mut state = GameState::new();
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
        assert_eq!(state.status_line(), "Player: O");
    }

    #[test]
    fn test_rejects_out_of_turn_mark() {
        let mut state = GameState::new();
        let err = state.place_mark(Mark::O, 0).unwrap_err();
        assert_eq!(err, "Not your turn");
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut state = GameState::new();
        state.place_mark(Mark::X, 0).unwrap();
        let err = state.place_mark(Mark::O, 0).unwrap_err();
        assert_eq!(err, "Cell is already marked");
    }

    #[test]
    fn test_rejects_out_of_bounds_cell() {
        let mut state = GameState::new();
        assert!(state.place_mark(Mark::X, BOARD_CELLS).is_err());
    }

    #[test]
    fn test_rejects_moves_after_game_over() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (Mark::X, 0),
                (Mark::O, 3),
                (Mark::X, 1),
                (Mark::O, 4),
                (Mark::X, 2),
            ],
        );
        assert_eq!(state.outcome(), GameOutcome::Win(Mark::X));
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.status_line(), "Winner: X");

        let err = state.place_mark(Mark::O, 5).unwrap_err();
        assert_eq!(err, "Game is already over");
    }

    #[test]
    fn test_winning_line_after_win() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (Mark::X, 0),
                (Mark::O, 3),
                (Mark::X, 1),
                (Mark::O, 4),
                (Mark::X, 2),
            ],
        );
        let winning = state.winning_line().unwrap();
        assert_eq!(winning.mark, Mark::X);
        assert_eq!(winning.line, [0, 1, 2]);
    }

    #[test]
    fn test_turn_does_not_switch_on_final_move() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (Mark::X, 0),
                (Mark::O, 3),
                (Mark::X, 1),
                (Mark::O, 4),
                (Mark::X, 2),
            ],
        );
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_draw_game() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (Mark::X, 0),
                (Mark::O, 1),
                (Mark::X, 2),
                (Mark::O, 4),
                (Mark::X, 3),
                (Mark::O, 5),
                (Mark::X, 7),
                (Mark::O, 6),
                (Mark::X, 8),
            ],
        );
        assert_eq!(state.outcome(), GameOutcome::Draw);
        assert_eq!(state.winner(), None);
        assert_eq!(state.status_line(), "Draw");
    }

    #[test]
    fn test_reset_clears_the_game() {
        let mut state = GameState::new();
        play(&mut state, &[(Mark::X, 4), (Mark::O, 0)]);
        state.reset();
        assert_eq!(state.board, empty_board());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, None);
    }
}
