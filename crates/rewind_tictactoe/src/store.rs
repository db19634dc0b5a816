//! Game state store: board history, replay cursor and move-list order.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{StoreError, StoreErrorKind};
use crate::rules::winning_line;
use crate::snapshot::Snapshot;
use crate::types::{Player, Square};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Result of a [`GameStore::place`] call.
///
/// Ignored placements are not errors; the board simply stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was placed, producing history entry `step`.
    Placed {
        /// Who moved.
        player: Player,
        /// Index of the new snapshot.
        step: usize,
    },
    /// The current snapshot already has a winning line.
    GameOver,
    /// The square already holds a mark.
    Occupied,
    /// The index is not on the board.
    OutOfBounds,
}

/// Owns the history of one game session.
///
/// `history[0]` is always the empty board and the cursor always points
/// at an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    history: Vec<Snapshot>,
    cursor: usize,
    order: MoveOrder,
}

impl GameStore {
    /// Creates a store holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a store with the given initial move-list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            cursor: 0,
            order,
        }
    }

    /// All snapshots, game start first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move-list display order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// Whose mark the next placement will be.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Places the current player's mark on square `index`.
    ///
    /// Any snapshots after the cursor are discarded first. Moves on an
    /// occupied square, off the board, or after a win leave the store
    /// untouched.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn place(&mut self, index: usize) -> Placement {
        let board = self.current().board();

        if winning_line(board).is_some() {
            debug!("Ignoring move, game already won");
            return Placement::GameOver;
        }
        if let Some(Square::Occupied(_)) = board.get(index) {
            debug!("Ignoring move, square occupied");
            return Placement::Occupied;
        }

        let player = self.next_player();
        let mut board = board.clone();
        if let Err(reason) = board.set(index, Square::Occupied(player)) {
            debug!(reason, "Ignoring move, index off the board");
            return Placement::OutOfBounds;
        }

        self.history.truncate(self.cursor + 1);
        self.history.push(Snapshot::after_move(board, index));
        self.cursor = self.history.len() - 1;

        debug!(%player, step = self.cursor, "Move placed");
        Placement::Placed {
            player,
            step: self.cursor,
        }
    }

    /// Moves the cursor to `step` without changing the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StoreError> {
        if step >= self.history.len() {
            let err = StoreError::new(StoreErrorKind::StepOutOfRange {
                step,
                len: self.history.len(),
            });
            warn!(error = %err, "Rejected history jump");
            return Err(err);
        }
        self.cursor = step;
        debug!("Cursor moved");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = %self.order, "Move order toggled");
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SQUARE_COUNT;

    #[test]
    fn test_new_store_has_empty_board() {
        let store = GameStore::new();
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.current(), &Snapshot::initial());
        assert_eq!(store.next_player(), Player::X);
    }

    #[test]
    fn test_place_alternates_players() {
        let mut store = GameStore::new();
        assert_eq!(
            store.place(4),
            Placement::Placed {
                player: Player::X,
                step: 1
            }
        );
        assert_eq!(
            store.place(0),
            Placement::Placed {
                player: Player::O,
                step: 2
            }
        );
        assert_eq!(store.next_player(), Player::X);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut store = GameStore::new();
        assert_eq!(store.place(SQUARE_COUNT), Placement::OutOfBounds);
        assert_eq!(store, GameStore::new());
    }

    #[test]
    fn test_out_of_bounds_after_jump_keeps_future() {
        let mut store = GameStore::new();
        store.place(0);
        store.place(4);
        store.jump_to(1).unwrap();
        let before = store.clone();

        assert_eq!(store.place(SQUARE_COUNT + 3), Placement::OutOfBounds);
        assert_eq!(store, before);
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_jump_out_of_range_leaves_cursor() {
        let mut store = GameStore::new();
        store.place(0);
        let err = store.jump_to(2).unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::StepOutOfRange { step: 2, len: 2 });
        assert_eq!(store.cursor(), 1);
    }

    #[test]
    fn test_toggle_order() {
        let mut store = GameStore::new();
        store.toggle_order();
        assert_eq!(store.order(), MoveOrder::Descending);
        store.toggle_order();
        assert_eq!(store.order(), MoveOrder::Ascending);
    }
}
