//! Move list and sort toggle.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, MoveEntry, MoveOrder};

use crate::config::Palette;

/// Renders the move list block and one row per visible entry.
///
/// `rows` pairs each history step with the row it occupies.
pub fn render_moves(
    frame: &mut Frame,
    block_area: Rect,
    rows: &[(usize, Rect)],
    view: &GameView,
    palette: &Palette,
) {
    let block = Block::default().title(" Moves ").borders(Borders::ALL);
    frame.render_widget(block, block_area);

    for (step, area) in rows {
        if let Some(entry) = view.moves.iter().find(|entry| entry.step == *step) {
            frame.render_widget(Paragraph::new(entry_line(entry, palette)), *area);
        }
    }
}

fn entry_line(entry: &MoveEntry, palette: &Palette) -> Line<'static> {
    let text = format!("{:>2}. {}", entry.ordinal, entry.label);
    if entry.selected {
        Line::from(Span::styled(
            text,
            Style::default()
                .bg(palette.selected)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(text)
    }
}

/// Renders the clickable sort toggle.
pub fn render_toggle(frame: &mut Frame, area: Rect, order: MoveOrder) {
    let label = match order {
        MoveOrder::Ascending => "[⇅] oldest first",
        MoveOrder::Descending => "[⇅] newest first",
    };
    let toggle = Paragraph::new(label).style(Style::default().fg(Color::Cyan));
    frame.render_widget(toggle, area);
}
