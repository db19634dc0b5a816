//! Translates terminal events into game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use rewind_tictactoe::{GameStore, SQUARE_COUNT};

use crate::ui::{Target, ViewLayout};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the next mark on a square.
    Place(usize),
    /// Show a history step.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

impl From<Target> for Action {
    fn from(target: Target) -> Self {
        match target {
            Target::Cell(index) => Action::Place(index),
            Target::Move(step) => Action::JumpTo(step),
            Target::ToggleOrder => Action::ToggleOrder,
        }
    }
}

/// Maps any terminal event to an action.
pub fn event_action(event: &Event, store: &GameStore, layout: Option<&ViewLayout>) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key, store),
        Event::Mouse(mouse) => mouse_action(mouse, layout?),
        _ => None,
    }
}

/// Maps a key press to an action.
pub fn key_action(key: &KeyEvent, store: &GameStore) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let last = store.history().len() - 1;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::ToggleOrder),
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            (1..=SQUARE_COUNT)
                .contains(&digit)
                .then(|| Action::Place(digit - 1))
        }
        KeyCode::Left => Some(Action::JumpTo(store.cursor().saturating_sub(1))),
        KeyCode::Right => Some(Action::JumpTo((store.cursor() + 1).min(last))),
        KeyCode::Home => Some(Action::JumpTo(0)),
        KeyCode::End => Some(Action::JumpTo(last)),
        _ => None,
    }
}

/// Maps a left click to whatever lies under it.
pub fn mouse_action(mouse: &MouseEvent, layout: &ViewLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout.hit(mouse.column, mouse.row).map(Action::from)
        }
        _ => None,
    }
}
