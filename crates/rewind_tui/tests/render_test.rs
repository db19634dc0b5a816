//! Renders frames into an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rewind_tictactoe::GameStore;
use rewind_tui::{Action, App, Palette, Settings, ui};

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut layout = None;
    terminal
        .draw(|f| layout = Some(ui::draw(f, app)))
        .unwrap();
    app.set_layout(layout.unwrap());
    screen_text(terminal.backend().buffer())
}

#[test]
fn test_initial_frame() {
    let mut app = App::new(GameStore::new(), Palette::default());
    let text = render(&mut app);
    assert!(text.contains("Rewind - Tic Tac Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains(" 1. Go to game start"));
    assert!(text.contains("oldest first"));
}

#[test]
fn test_winning_frame() {
    let mut app = App::new(GameStore::new(), Palette::default());
    for index in [0, 4, 1, 5, 2] {
        app.apply(Action::Place(index));
    }
    let text = render(&mut app);
    assert!(text.contains("Winner: X"));
    assert!(text.contains(" 6. Go to move #5 (3,1)"));
}

#[test]
fn test_descending_frame_lists_latest_first() {
    let settings = Settings::from_toml("descending = true").unwrap();
    let mut app = App::from_settings(&settings).unwrap();
    app.apply(Action::Place(4));
    app.apply(Action::Place(0));

    let text = render(&mut app);
    let latest = text.find("Go to move #2").unwrap();
    let start = text.find("Go to game start").unwrap();
    assert!(latest < start);
    assert!(text.contains("newest first"));
}

#[test]
fn test_jump_back_frame() {
    let mut app = App::new(GameStore::new(), Palette::default());
    for index in [0, 4, 1, 5, 2] {
        app.apply(Action::Place(index));
    }
    app.apply(Action::JumpTo(2));
    let text = render(&mut app);
    assert!(text.contains("Next player: X"));
    assert!(!text.contains("Winner"));
}
