//! Presentation state derived from a [`GameStore`].
//!
//! Nothing here is stored; a fresh [`GameView`] is computed for every
//! render so it can never drift from the history it describes.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::rules::{WinLine, winner, winning_line};
use crate::store::{GameStore, MoveOrder};
use crate::types::{Board, Player, SQUARE_COUNT};

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every square was filled without a line.
    #[display("Draw!")]
    Draw,
    /// The game continues.
    #[display("Next player: {_0}")]
    Next(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Ordinal shown next to the entry.
    ///
    /// Stays `step + 1` in both orders, the list numbering reverses
    /// along with the entries.
    pub ordinal: usize,
    /// Button text.
    pub label: String,
    /// Whether this entry is the displayed snapshot.
    pub selected: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the cursor.
    pub board: Board,
    /// Completed line on that board, if any.
    pub win_line: Option<WinLine>,
    /// Status line.
    pub status: Status,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Display order of `moves`.
    pub order: MoveOrder,
}

impl GameView {
    /// Derives the view of the snapshot at the store's cursor.
    #[instrument(skip(store), fields(cursor = store.cursor()))]
    pub fn derive(store: &GameStore) -> Self {
        let board = store.current().board().clone();
        let win_line = winning_line(&board);
        let status = status(store, &board);
        let moves = move_entries(store);

        Self {
            board,
            win_line,
            status,
            moves,
            order: store.order(),
        }
    }

    /// Whether square `index` is part of the winning line.
    pub fn is_winning_square(&self, index: usize) -> bool {
        self.win_line.is_some_and(|line| line.contains(index))
    }
}

/// Derives the status line.
///
/// A draw is recognised by the cursor reaching the last possible step,
/// which only happens on a full board.
fn status(store: &GameStore, board: &Board) -> Status {
    match winner(board) {
        Some(player) => Status::Winner(player),
        None if store.cursor() == SQUARE_COUNT => Status::Draw,
        None => Status::Next(store.next_player()),
    }
}

/// Labels the move list entry for history index `step`.
pub fn move_label(store: &GameStore, step: usize) -> String {
    match store.history().get(step).and_then(|s| *s.coordinate()) {
        Some(coordinate) if step > 0 => format!("Go to move #{} {}", step, coordinate),
        _ => "Go to game start".to_string(),
    }
}

fn move_entries(store: &GameStore) -> Vec<MoveEntry> {
    let entries = (0..store.history().len()).map(|step| MoveEntry {
        step,
        ordinal: step + 1,
        label: move_label(store, step),
        selected: step == store.cursor(),
    });

    match store.order() {
        MoveOrder::Ascending => entries.collect(),
        MoveOrder::Descending => entries.rev().collect(),
    }
}
