use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::row::RowEvent;
use crate::tui::app::{App, HitTarget};

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click(app, mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        _ => {}
    }
}

fn click(app: &mut App, x: u16, y: u16) {
    let Some((row, target)) = app.hit_test(x, y) else {
        return;
    };
    app.status_message = None;
    app.cursor = row;
    let editing = app.rows.get(row).is_some_and(|r| r.is_editing());
    match target {
        HitTarget::Marker => app.dispatch(row, RowEvent::PressMarker),
        // Marker and title share one touch target until the title becomes editable
        HitTarget::Title if editing => app.focus_row(row),
        HitTarget::Title => app.dispatch(row, RowEvent::PressMarker),
        HitTarget::EditControl => app.dispatch(row, RowEvent::PressEditControl),
        HitTarget::Delete => app.dispatch(row, RowEvent::PressDelete),
    }
}
