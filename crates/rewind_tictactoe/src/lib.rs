//! Tic-tac-toe with move history and replay.
//!
//! The crate has no terminal or I/O code. A front end owns a
//! [`GameStore`], forwards input to [`GameStore::place`],
//! [`GameStore::jump_to`] and [`GameStore::toggle_order`], and draws
//! whatever [`GameView::derive`] returns.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStore, GameView, Player, Status};
//!
//! let mut store = GameStore::new();
//! for index in [0, 4, 1, 5, 2] {
//!     store.place(index);
//! }
//! assert_eq!(GameView::derive(&store).status, Status::Winner(Player::X));
//!
//! store.jump_to(2).unwrap();
//! assert_eq!(GameView::derive(&store).status.to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
mod snapshot;
mod store;
mod types;
mod view;

pub use error::{StoreError, StoreErrorKind};
pub use rules::{WinLine, winner, winning_line};
pub use snapshot::{Coordinate, Snapshot};
pub use store::{GameStore, MoveOrder, Placement};
pub use types::{BOARD_SIZE, Board, Player, SQUARE_COUNT, Square};
pub use view::{GameView, MoveEntry, Status, move_label};
