//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Square};

use crate::config::Palette;

/// Renders every square of the view's board into its cell.
pub fn render_board(frame: &mut Frame, cells: &[Rect], view: &GameView, palette: &Palette) {
    for (index, area) in cells.iter().enumerate() {
        let square = view.board.get(index).unwrap_or_default();
        render_square(frame, *area, index, square, view.is_winning_square(index), palette);
    }
}

fn render_square(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    square: Square,
    winning: bool,
    palette: &Palette,
) {
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(mark_color(player, palette))
                .add_modifier(Modifier::BOLD),
        ),
    };
    let mut border = Style::default().fg(Color::DarkGray);

    if winning {
        style = style.bg(palette.highlight).fg(Color::Black);
        border = border.fg(palette.highlight);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn mark_color(player: Player, palette: &Palette) -> Color {
    match player {
        Player::X => palette.x,
        Player::O => palette.o,
    }
}
