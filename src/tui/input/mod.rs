mod edit;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::row::{EditOp, RowEvent};

use super::app::App;

use edit::handle_edit;
use navigate::handle_navigate;

/// Handle a key event. The focused editing row, if any, gets the key.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    match app.focused_row() {
        Some(row) => handle_edit(app, row, key),
        None => handle_navigate(app, key),
    }
}

/// Handle a mouse event (left click on row controls, wheel moves the cursor)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    mouse::handle_mouse(app, mouse);
}

/// Handle a bracketed paste: goes into the focused title, newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(row) = app.focused_row() {
        app.dispatch(row, RowEvent::Edit(EditOp::InsertStr(text.to_string())));
    }
}
