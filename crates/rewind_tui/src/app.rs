//! Application state and event handling.

use crossterm::event::Event;
use rewind_tictactoe::{GameStore, Placement};
use tracing::{debug, info, instrument, warn};

use crate::config::{Palette, Settings};
use crate::input::{Action, event_action};
use crate::ui::ViewLayout;

/// Main application state.
///
/// Owns the one [`GameStore`] of the session; everything drawn is
/// derived from it.
#[derive(Debug)]
pub struct App {
    store: GameStore,
    palette: Palette,
    layout: Option<ViewLayout>,
    should_quit: bool,
}

impl App {
    /// Creates an application with an empty board.
    pub fn new(store: GameStore, palette: Palette) -> Self {
        Self {
            store,
            palette,
            layout: None,
            should_quit: false,
        }
    }

    /// Creates an application configured from settings.
    #[instrument(skip(settings))]
    pub fn from_settings(settings: &Settings) -> Result<Self, crate::ConfigError> {
        let palette = settings.theme().palette()?;
        Ok(Self::new(GameStore::with_order(settings.order()), palette))
    }

    /// The game history.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Theme colours.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the last frame drew each clickable region.
    pub fn set_layout(&mut self, layout: ViewLayout) {
        self.layout = Some(layout);
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        if let Some(action) = event_action(event, &self.store, self.layout.as_ref()) {
            self.apply(action);
        }
    }

    /// Applies an action to the store.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Place(index) => match self.store.place(index) {
                Placement::Placed { player, step } => {
                    info!(%player, index, step, "Move placed");
                }
                ignored => debug!(?ignored, index, "Move ignored"),
            },
            Action::JumpTo(step) => {
                if let Err(e) = self.store.jump_to(step) {
                    warn!(error = %e, "Jump failed");
                }
            }
            Action::ToggleOrder => self.store.toggle_order(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;
    use rewind_tictactoe::{GameView, MoveOrder, Player, Status};

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    // Mirrors the draw loop: every event is handled against the latest frame.
    fn relayout(app: &mut App) -> ViewLayout {
        let layout = ViewLayout::compute(Rect::new(0, 0, 80, 24), &GameView::derive(app.store()));
        app.set_layout(layout.clone());
        layout
    }

    fn click_cell(app: &mut App, index: usize) {
        let cell = relayout(app).cells[index];
        click(app, cell.x + 1, cell.y + 1);
    }

    #[test]
    fn test_clicks_before_first_frame_ignored() {
        let mut app = App::new(GameStore::new(), Palette::default());
        click(&mut app, 10, 10);
        assert_eq!(app.store().history().len(), 1);
    }

    #[test]
    fn test_clicking_cells_plays_game() {
        let mut app = App::new(GameStore::new(), Palette::default());
        for index in [0, 4, 1, 5, 2] {
            click_cell(&mut app, index);
        }
        assert_eq!(
            GameView::derive(app.store()).status,
            Status::Winner(Player::X)
        );

        // Board is frozen after the win.
        click_cell(&mut app, 8);
        assert_eq!(app.store().history().len(), 6);
    }

    #[test]
    fn test_clicking_move_entry_jumps() {
        let mut app = App::new(GameStore::new(), Palette::default());
        click_cell(&mut app, 0);
        click_cell(&mut app, 4);

        let layout = relayout(&mut app);
        let (step, row) = layout.moves[1];
        assert_eq!(step, 1);
        click(&mut app, row.x, row.y);
        assert_eq!(app.store().cursor(), 1);
        assert_eq!(app.store().history().len(), 3);
    }

    #[test]
    fn test_clicking_toggle_flips_order() {
        let mut app = App::new(GameStore::new(), Palette::default());
        let toggle = relayout(&mut app).toggle;
        click(&mut app, toggle.x, toggle.y);
        assert_eq!(app.store().order(), MoveOrder::Descending);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(GameStore::new(), Palette::default());
        app.handle_event(&Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_out_of_range_jump_is_absorbed() {
        let mut app = App::new(GameStore::new(), Palette::default());
        app.apply(Action::JumpTo(3));
        assert_eq!(app.store().cursor(), 0);
    }

    #[test]
    fn test_from_settings_uses_order() {
        let settings = Settings::from_toml("descending = true").unwrap();
        let app = App::from_settings(&settings).unwrap();
        assert_eq!(app.store().order(), MoveOrder::Descending);
    }
}
