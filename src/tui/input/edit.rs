use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::row::{EditOp, RowEvent};
use crate::tui::app::App;

/// Keys for a row whose title is focused and editable
pub(super) fn handle_edit(app: &mut App, row: usize, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Enter => RowEvent::Submit,
        KeyCode::Esc => RowEvent::Cancel,
        KeyCode::Char('w') if ctrl => RowEvent::Edit(EditOp::DeleteWordBack),
        KeyCode::Char('a') if ctrl => RowEvent::Edit(EditOp::Home),
        KeyCode::Char('e') if ctrl => RowEvent::Edit(EditOp::End),
        KeyCode::Char(_) if ctrl => return,
        KeyCode::Char(c) => RowEvent::Edit(EditOp::Insert(c)),
        KeyCode::Backspace => RowEvent::Edit(EditOp::Backspace),
        KeyCode::Delete => RowEvent::Edit(EditOp::DeleteForward),
        KeyCode::Left => RowEvent::Edit(EditOp::Left),
        KeyCode::Right => RowEvent::Edit(EditOp::Right),
        KeyCode::Home => RowEvent::Edit(EditOp::Home),
        KeyCode::End => RowEvent::Edit(EditOp::End),
        _ => return,
    };
    app.dispatch(row, event);
}
