//! Event routing: raw crossterm input to gesture, gate, and global
//! operations.
//!
//! The config decides which adapter the mouse stream feeds: the pointer
//! protocol (event-target based, like native drag-and-drop) or the
//! touch protocol (coordinate based, like a touch-sequence). While the
//! reason modal is open it captures all keyboard input and the board
//! ignores the mouse.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::App;

pub fn handle_events(event: Event, app: &mut App) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(key, app),
        Event::Mouse(mouse) => handle_mouse(mouse, app),
        _ => {}
    }
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) {
    // The reason modal has priority while visible
    if app.gate.is_open() {
        match key.code {
            KeyCode::Esc => app.cancel_modal(),
            KeyCode::Enter => app.confirm_modal(),
            KeyCode::Char(c) => app.gate.insert_char(c),
            KeyCode::Backspace => app.gate.backspace(),
            KeyCode::Delete => app.gate.delete_forward(),
            KeyCode::Left => app.gate.cursor_left(),
            KeyCode::Right => app.gate.cursor_right(),
            _ => {}
        }
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    if app.show_logs {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q')) {
            app.show_logs = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('r') => app.refresh_data(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('L') => app.show_logs = true,
        KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    // The board is inert while the modal or an overlay is up
    if app.gate.is_open() || app.show_help || app.show_logs {
        return;
    }

    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.touch_input {
                app.gestures.touch_start(x, y, &app.board.geometry);
            } else if let Some((record_id, status)) = app
                .board
                .geometry
                .card_at(x, y)
                .map(|card| (card.record_id.clone(), card.status))
            {
                app.gestures.drag_start(&record_id, status);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.touch_input {
                app.gestures.touch_move(x, y, &app.board.geometry);
            } else {
                let lane = app.board.geometry.lane_at(x, y);
                app.gestures.drag_over(lane);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let intent = if app.touch_input {
                app.gestures.touch_end(x, y, &app.board.geometry, &app.store)
            } else {
                let intent = app
                    .board
                    .geometry
                    .lane_at(x, y)
                    .and_then(|lane| app.gestures.drop_on(lane, &app.store));
                app.gestures.drag_end();
                intent
            };
            if let Some(intent) = intent {
                app.submit_intent(intent);
            }
        }
        MouseEventKind::ScrollUp => {
            if !app.gestures.suppress_scroll() {
                if let Some(lane) = app.board.geometry.lane_at(x, y) {
                    app.board.scroll_lane(lane, -1);
                }
            }
        }
        MouseEventKind::ScrollDown => {
            if !app.gestures.suppress_scroll() {
                if let Some(lane) = app.board.geometry.lane_at(x, y) {
                    app.board.scroll_lane(lane, 1);
                }
            }
        }
        _ => {}
    }
}
