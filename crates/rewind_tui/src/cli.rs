//! Command-line interface for rewind.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// File that receives log output
    #[arg(long, global = true, default_value = "rewind.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply moves without a terminal UI and print the resulting view
    Replay {
        /// Square indices (0-8, row-major) in the order they are played
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        moves: Vec<u8>,

        /// History step to display after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// List the latest move first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable board, status and move list
    Text,
    /// The derived view as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli =
            Cli::try_parse_from(["rewind", "replay", "0", "4", "1", "--jump", "2", "-f", "json"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 4, 1],
                jump: Some(2),
                descending: false,
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_replay_rejects_off_board_square() {
        assert!(Cli::try_parse_from(["rewind", "replay", "9"]).is_err());
    }
}
