use tictactoe_engine::game::{BOARD_CELLS, BOARD_SIDE, GameOutcome, Mark};
use tictactoe_engine::session::{GameOverNotification, HUMAN_MARK, StateUpdate};
use tokio::sync::mpsc;

use crate::state::ClientCommand;

/// Reads stdin on its own thread and forwards parsed commands; the game
/// loop stays free to run the computer's turn meanwhile.
pub fn spawn_input_reader(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();

        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) => {
                    let _ = command_tx.send(ClientCommand::Quit);
                    break;
                }
                Ok(_) => {
                    let input = line.trim();
                    match parse_command(input) {
                        Some(command) => {
                            let is_quit = matches!(command, ClientCommand::Quit);
                            if command_tx.send(command).is_err() || is_quit {
                                break;
                            }
                        }
                        None => {
                            if !input.is_empty() {
                                println!(
                                    "Enter a cell number 1-{}, 'r' to restart or 'q' to quit",
                                    BOARD_CELLS
                                );
                            }
                        }
                    }
                }
                Err(_) => break,
            }
        }
    });
}

fn parse_command(input: &str) -> Option<ClientCommand> {
    match input {
        "q" | "quit" | "exit" => Some(ClientCommand::Quit),
        "r" | "restart" => Some(ClientCommand::Restart),
        _ => input
            .parse::<usize>()
            .ok()
            .filter(|&n| (1..=BOARD_CELLS).contains(&n))
            .map(|n| ClientCommand::Place { cell: n - 1 }),
    }
}

#[derive(Clone)]
pub struct BoardRenderer {
    show_cell_hints: bool,
}

impl BoardRenderer {
    pub fn new(show_cell_hints: bool) -> Self {
        Self { show_cell_hints }
    }

    pub fn render(&self, update: &StateUpdate) {
        println!();
        for row in 0..BOARD_SIDE {
            let base = row * BOARD_SIDE;
            let cells: Vec<String> = (base..base + BOARD_SIDE)
                .map(|cell| self.cell_text(update.board[cell], cell))
                .collect();
            println!(" {} ", cells.join(" | "));
            if row + 1 < BOARD_SIDE {
                println!("---+---+---");
            }
        }
        println!();
        println!("{}", update.status_line);

        if update.outcome == GameOutcome::InProgress {
            if update.current_mark == HUMAN_MARK {
                println!("Your move (1-{}):", BOARD_CELLS);
            } else {
                println!("Computer is thinking...");
            }
        }
    }

    pub fn render_game_over(&self, notification: &GameOverNotification) {
        match notification.outcome {
            GameOutcome::Win(mark) => println!("Game over: {} wins!", mark),
            GameOutcome::Draw => println!("Game over: draw."),
            GameOutcome::InProgress => {}
        }

        if let Some(winning) = &notification.winning_line {
            let cells: Vec<String> = winning.line.iter().map(|&c| (c + 1).to_string()).collect();
            println!("Winning line: {}", cells.join(", "));
        }

        println!("Press 'r' to play again or 'q' to quit.");
    }

    fn cell_text(&self, mark: Mark, cell: usize) -> String {
        match mark {
            Mark::Empty if self.show_cell_hints => (cell + 1).to_string(),
            Mark::Empty => " ".to_string(),
            mark => mark.to_string(),
        }
    }
}
