//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_tictactoe::MoveOrder;
use rewind_tui::{App, Cli, Command, OutputFormat, Settings};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;
    rewind_tui::init_tracing(&cli.log_file, settings.log_filter())?;
    info!(config = %cli.config.display(), "Starting rewind");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&settings),
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => run_replay(&settings, &moves, jump, descending, format),
    }
}

/// Run the interactive terminal game
#[instrument(skip(settings))]
fn run_play(settings: &Settings) -> Result<()> {
    let app = App::from_settings(settings)?;
    rewind_tui::run_tui(app)
}

/// Print the view after a scripted game
#[instrument(skip(settings))]
fn run_replay(
    settings: &Settings,
    moves: &[u8],
    jump: Option<usize>,
    descending: bool,
    format: OutputFormat,
) -> Result<()> {
    let order = if descending {
        MoveOrder::Descending
    } else {
        settings.order()
    };
    let moves: Vec<usize> = moves.iter().map(|&m| usize::from(m)).collect();
    let view = rewind_tui::replay(&moves, jump, order)?;
    print!("{}", rewind_tui::render(&view, format)?);
    Ok(())
}
