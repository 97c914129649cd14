mod config;
mod runner;
mod state;
mod ui;

use clap::Parser;
use tictactoe_engine::logger;
use tictactoe_engine::session::SessionSettings;
use tokio::sync::mpsc;

use config::get_config_manager;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Path to the YAML config file; defaults to a file next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Override the computer's thinking delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_config()?;

    let settings = SessionSettings {
        bot_delay_ms: args.delay_ms.unwrap_or(config.game.bot_delay_ms),
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    ui::spawn_input_reader(command_tx);

    runner::run_games(settings, config.game.show_cell_hints, command_rx).await;

    Ok(())
}
