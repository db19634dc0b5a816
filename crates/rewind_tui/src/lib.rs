//! Terminal front end for rewind tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`GameStore`](rewind_tictactoe::GameStore) and applies actions
//! - **Input**: maps key presses and mouse clicks to [`Action`]s
//! - **UI**: draws a frame and records where each clickable region went
//! - **Replay**: the same view, printed without a terminal

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, Palette, Settings, Theme};
pub use input::{Action, event_action, key_action, mouse_action};
pub use logging::init_tracing;
pub use replay::{render, render_text, replay};
pub use tui::{run_app, run_tui};
