use tictactoe_engine::log;
use tictactoe_engine::session::{
    GameBroadcaster, GameOverNotification, GameSession, InGameCommand, SessionSettings,
    SessionState, StateUpdate,
};
use tokio::sync::mpsc;

use crate::state::ClientCommand;
use crate::ui::BoardRenderer;

#[derive(Clone)]
struct TerminalBroadcaster {
    renderer: BoardRenderer,
}

impl TerminalBroadcaster {
    fn new(show_cell_hints: bool) -> Self {
        Self {
            renderer: BoardRenderer::new(show_cell_hints),
        }
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, update: StateUpdate) {
        self.renderer.render(&update);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.renderer.render_game_over(&notification);
    }
}

/// Runs games back to back until the player quits. Each game is one
/// session task; commands from the input thread are forwarded to it.
pub async fn run_games(
    settings: SessionSettings,
    show_cell_hints: bool,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let broadcaster = TerminalBroadcaster::new(show_cell_hints);

    'games: loop {
        let session_state = SessionState::create(&settings);
        let mut game_handle = tokio::spawn(GameSession::run(
            session_state.clone(),
            broadcaster.clone(),
        ));

        let notification = loop {
            tokio::select! {
                result = &mut game_handle => {
                    match result {
                        Ok(notification) => break notification,
                        Err(e) => {
                            log!("Game task failed: {}", e);
                            return;
                        }
                    }
                }
                command = command_rx.recv() => {
                    match command {
                        Some(ClientCommand::Place { cell }) => {
                            GameSession::handle_command(
                                &session_state,
                                InGameCommand::Place { cell },
                            )
                            .await;
                        }
                        Some(ClientCommand::Restart) => {
                            GameSession::handle_command(&session_state, InGameCommand::Restart)
                                .await;
                        }
                        Some(ClientCommand::Quit) | None => {
                            game_handle.abort();
                            return;
                        }
                    }
                }
            }
        };

        broadcaster.broadcast_game_over(notification).await;

        // The session has ended; only restart or quit are meaningful now.
        loop {
            match command_rx.recv().await {
                Some(ClientCommand::Restart) => continue 'games,
                Some(ClientCommand::Quit) | None => return,
                Some(ClientCommand::Place { .. }) => {}
            }
        }
    }
}
