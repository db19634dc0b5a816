//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Board, Player};

/// Every line that wins the game, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Three square indices held by the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The square indices in the line, in enumeration order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are scanned rows first, then columns, then diagonals.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    LINES.iter().copied().find_map(|[a, b, c]| {
        let sq = board.get(a)?;
        sq.player()?;
        (Some(sq) == board.get(b) && Some(sq) == board.get(c)).then_some(WinLine([a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the player occupying the first square of the winning line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let line = winning_line(board)?;
    board.get(line.indices()[0]).and_then(|sq| sq.player())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([2, 4, 6]));
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_row_takes_priority_over_column() {
        // Top row and left column both belong to X.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_takes_priority_over_diagonal() {
        let board = board_with(&[
            (2, Player::O),
            (5, Player::O),
            (8, Player::O),
            (4, Player::O),
            (0, Player::O),
        ]);
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([2, 5, 8]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Player::O)));
            let found = winning_line(&board).expect("line should win");
            assert_eq!(found.indices(), line);
            assert!(line.iter().all(|&i| found.contains(i)));
        }
    }
}
