//! Stateless UI rendering.

mod board;
mod history;
mod layout;

pub use layout::{Target, ViewLayout};

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, Status};

use crate::app::App;

const HELP: &str = "click a square or move | 1-9 place | ←/→ step | s sort | q quit";

/// Draws the whole frame and returns where everything went.
pub fn draw(frame: &mut Frame, app: &App) -> ViewLayout {
    let view = GameView::derive(app.store());
    let layout = ViewLayout::compute(frame.area(), &view);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    board::render_board(frame, &layout.cells, &view, app.palette());

    let status_style = match view.status {
        Status::Winner(_) => Style::default()
            .fg(app.palette().highlight)
            .add_modifier(Modifier::BOLD),
        Status::Draw | Status::Next(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status.to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    history::render_toggle(frame, layout.toggle, view.order);
    history::render_moves(frame, layout.move_list, &layout.moves, &view, app.palette());

    let footer = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);

    layout
}
