//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the
//! history store so views can derive status without touching it.

pub mod win;

pub use win::{LINES, WinLine, winner, winning_line};
