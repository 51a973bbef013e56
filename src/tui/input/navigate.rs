use crossterm::event::{KeyCode, KeyEvent};

use crate::row::RowEvent;
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.dispatch(app.cursor, RowEvent::PressMarker),
        KeyCode::Char('e') => app.dispatch(app.cursor, RowEvent::PressEditControl),
        KeyCode::Enter => {
            // An editing row that lost focus to another row gets it back;
            // otherwise Enter is the edit control.
            if app.rows.get(app.cursor).is_some_and(|row| row.is_editing()) {
                app.focus_row(app.cursor);
            } else {
                app.dispatch(app.cursor, RowEvent::PressEditControl);
            }
        }
        KeyCode::Esc => app.dispatch(app.cursor, RowEvent::Cancel),
        KeyCode::Char('d') | KeyCode::Delete => app.dispatch(app.cursor, RowEvent::PressDelete),
        _ => {}
    }
}
