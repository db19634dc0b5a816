//! Headless replay: apply moves and print the derived view.

use std::fmt::Write as _;

use anyhow::Result;
use rewind_tictactoe::{GameStore, GameView, MoveOrder, Placement};
use tracing::{info, instrument, warn};

use crate::cli::OutputFormat;

/// Plays `moves` in order, optionally jumps, and derives the view.
///
/// Rejected moves are skipped like they are in the interactive game.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, order: MoveOrder) -> Result<GameView> {
    let mut store = GameStore::with_order(order);
    for &index in moves {
        let placement = store.place(index);
        if !matches!(placement, Placement::Placed { .. }) {
            warn!(index, ?placement, "Skipping move");
        }
    }
    if let Some(step) = jump {
        store.jump_to(step)?;
    }
    info!(steps = store.history().len(), cursor = store.cursor(), "Replay complete");
    Ok(GameView::derive(&store))
}

/// Formats a view for printing.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// Plain-text board, status and move list.
///
/// Squares on the winning line are wrapped in brackets and the selected
/// move is marked with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();

    for (index, square) in view.board.squares().iter().enumerate() {
        let mark = square
            .player()
            .map_or_else(|| (index + 1).to_string(), |p| p.to_string());
        if view.is_winning_square(index) {
            let _ = write!(out, "[{}]", mark);
        } else {
            let _ = write!(out, " {} ", mark);
        }
        match index % rewind_tictactoe::BOARD_SIZE {
            2 if index + 1 < rewind_tictactoe::SQUARE_COUNT => out.push_str("\n---+---+---\n"),
            2 => out.push('\n'),
            _ => out.push('|'),
        }
    }

    let _ = writeln!(out, "\n{}\n", view.status);
    let _ = writeln!(out, "Moves ({}):", view.order);
    for entry in &view.moves {
        let marker = if entry.selected { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}. {}", marker, entry.ordinal, entry.label);
    }
    out
}
