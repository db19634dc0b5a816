//! Immutable board snapshots recorded in the game history.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::types::{BOARD_SIZE, Board};

/// 1-based column/row of a move, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Coordinate {
    /// Column, 1 to 3 from left.
    column: usize,
    /// Row, 1 to 3 from top.
    row: usize,
}

impl Coordinate {
    /// Derives the coordinate of a board index (0-8).
    pub fn from_index(index: usize) -> Self {
        Self {
            column: index % BOARD_SIZE + 1,
            row: index / BOARD_SIZE + 1,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

/// One board configuration at a point in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// The board after the move.
    board: Board,
    /// Where the move that produced this snapshot was played.
    ///
    /// `None` for the initial empty board.
    coordinate: Option<Coordinate>,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    pub(crate) fn after_move(board: Board, index: usize) -> Self {
        Self {
            board,
            coordinate: Some(Coordinate::from_index(index)),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
