//! Screen regions and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use rewind_tictactoe::{BOARD_SIZE, GameView, SQUARE_COUNT};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16 + GAP * (BOARD_SIZE as u16 - 1);
const BOARD_HEIGHT: u16 = CELL_HEIGHT * BOARD_SIZE as u16 + GAP * (BOARD_SIZE as u16 - 1);

/// Something the user can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square by index.
    Cell(usize),
    /// A move-list entry by history step.
    Move(usize),
    /// The sort toggle.
    ToggleOrder,
}

/// Where each part of the frame was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    /// Title bar.
    pub title: Rect,
    /// Area holding the board grid.
    pub board: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; SQUARE_COUNT],
    /// Status line.
    pub status: Rect,
    /// Sort toggle.
    pub toggle: Rect,
    /// Bordered block around the move list.
    pub move_list: Rect,
    /// One row per visible move entry, in display order.
    pub moves: Vec<(usize, Rect)>,
    /// Key help.
    pub footer: Rect,
}

impl ViewLayout {
    /// Splits `area` for drawing `view`.
    pub fn compute(area: Rect, view: &GameView) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(1), // Toggle
                Constraint::Min(3),    // Moves
            ])
            .split(body[1]);

        let board = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|index| cell_rect(board, index));

        let move_list = info[2];
        let inner = inset(move_list);
        let moves = view
            .moves
            .iter()
            .skip(scroll_offset(view, inner.height))
            .zip(0..inner.height)
            .map(|(entry, offset)| {
                (
                    entry.step,
                    Rect::new(inner.x, inner.y + offset, inner.width, 1),
                )
            })
            .collect();

        Self {
            title: rows[0],
            board,
            cells,
            status: info[0],
            toggle: info[1],
            move_list,
            moves,
            footer: rows[2],
        }
    }

    /// Finds what lies under the terminal cell at `column`, `row`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);

        if let Some(index) = self.cells.iter().position(|cell| cell.contains(pos)) {
            return Some(Target::Cell(index));
        }
        if self.toggle.contains(pos) {
            return Some(Target::ToggleOrder);
        }
        self.moves
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(step, _)| Target::Move(*step))
    }
}

/// First entry to show so the selected one lands on the last visible row
/// when it would otherwise fall below the list.
fn scroll_offset(view: &GameView, visible: u16) -> usize {
    let visible = usize::from(visible);
    match view.moves.iter().position(|entry| entry.selected) {
        Some(selected) if visible > 0 && selected >= visible => selected + 1 - visible,
        _ => 0,
    }
}

fn cell_rect(board: Rect, index: usize) -> Rect {
    let col = (index % BOARD_SIZE) as u16;
    let row = (index / BOARD_SIZE) as u16;
    Rect::new(
        board.x + col * (CELL_WIDTH + GAP),
        board.y + row * (CELL_HEIGHT + GAP),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(board)
}

fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
