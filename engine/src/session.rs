use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};

use crate::game::{BOT_MARK, Board, GameOutcome, GameState, Mark, WinningLine, find_best_move};
use crate::log;

/// The human always plays X and moves first; the computer answers as O.
pub const HUMAN_MARK: Mark = Mark::X;

/// One-second pause before the computer's move is revealed.
pub const DEFAULT_BOT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub bot_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub enum InGameCommand {
    Place { cell: usize },
    Restart,
}

/// Snapshot pushed to the front-end after every state change.
#[derive(Debug, Clone)]
pub struct StateUpdate {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub status_line: String,
}

#[derive(Debug, Clone)]
pub struct GameOverNotification {
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: StateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Clone)]
pub struct SessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub turn_notify: Arc<Notify>,
    pub bot_delay: Duration,
}

impl SessionState {
    pub fn create(settings: &SessionSettings) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(GameState::new())),
            turn_notify: Arc::new(Notify::new()),
            bot_delay: Duration::from_millis(settings.bot_delay_ms),
        }
    }
}

pub struct GameSession;

impl GameSession {
    /// Drives one game from the current board to a terminal outcome.
    /// Broadcasts after every change, runs the computer's turns itself and
    /// parks on the turn notify while waiting for the human.
    pub async fn run(
        session_state: SessionState,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverNotification {
        loop {
            broadcast_state(&session_state, &broadcaster).await;

            let (is_game_over, is_bot_turn) = {
                let game_state = session_state.game_state.lock().await;
                (
                    game_state.outcome() != GameOutcome::InProgress,
                    game_state.current_mark == BOT_MARK,
                )
            };

            if is_game_over {
                break;
            }

            if is_bot_turn {
                play_bot_turn(&session_state).await;
            } else {
                session_state.turn_notify.notified().await;
            }
        }

        build_game_over_notification(&session_state).await
    }

    pub async fn handle_command(state: &SessionState, command: InGameCommand) {
        match command {
            InGameCommand::Place { cell } => {
                let mut game_state = state.game_state.lock().await;
                match game_state.place_mark(HUMAN_MARK, cell) {
                    Ok(()) => {
                        drop(game_state);
                        state.turn_notify.notify_one();
                    }
                    Err(e) => {
                        log!("Rejected move at cell {}: {}", cell, e);
                    }
                }
            }
            InGameCommand::Restart => {
                let mut game_state = state.game_state.lock().await;
                game_state.reset();
                drop(game_state);
                state.turn_notify.notify_one();
            }
        }
    }
}

async fn play_bot_turn(session_state: &SessionState) {
    tokio::time::sleep(session_state.bot_delay).await;

    let board = {
        let game_state = session_state.game_state.lock().await;
        game_state.board
    };

    let calculated_move = tokio::task::spawn_blocking(move || find_best_move(&board)).await;

    // A `None` move means the board is exhausted; nothing to apply.
    if let Ok(Some(cell)) = calculated_move {
        let mut game_state = session_state.game_state.lock().await;
        if let Err(e) = game_state.place_mark(BOT_MARK, cell) {
            // A restart can land between the snapshot and the reply.
            log!("Computer move at cell {} not applied: {}", cell, e);
        }
    }
}

async fn broadcast_state(session_state: &SessionState, broadcaster: &impl GameBroadcaster) {
    let game_state = session_state.game_state.lock().await;
    let update = StateUpdate {
        board: game_state.board,
        current_mark: game_state.current_mark,
        outcome: game_state.outcome(),
        status_line: game_state.status_line(),
    };
    drop(game_state);

    broadcaster.broadcast_state(update).await;
}

async fn build_game_over_notification(session_state: &SessionState) -> GameOverNotification {
    let game_state = session_state.game_state.lock().await;
    GameOverNotification {
        outcome: game_state.outcome(),
        winning_line: game_state.winning_line(),
    }
}
