use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, RowHitbox};

use super::task_row::draw_row;

/// Render the rows, record their hit regions and place the terminal cursor
/// in the focused title.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    app.hitboxes.clear();
    let bg = Style::default().bg(app.theme.background);

    if app.rows.is_empty() {
        let empty = Paragraph::new(" No tasks").style(bg.fg(app.theme.dim));
        frame.render_widget(empty, area);
        return;
    }
    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    // Keep the cursor row on screen
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if app.cursor >= app.scroll + visible_height {
        app.scroll = app.cursor + 1 - visible_height;
    }
    app.scroll = app.scroll.min(app.rows.len().saturating_sub(1));

    let end = app.rows.len().min(app.scroll + visible_height);
    let mut lines = Vec::with_capacity(end - app.scroll);
    let mut cursor = None;
    for (offset, idx) in (app.scroll..end).enumerate() {
        let row_area = Rect::new(area.x, area.y + offset as u16, area.width, 1);
        let drawn = draw_row(&app.rows[idx].view(), &app.theme, idx == app.cursor, row_area);
        app.hitboxes.push(RowHitbox {
            row: idx,
            marker: drawn.marker,
            title: drawn.title,
            edit: drawn.edit,
            delete: drawn.delete,
        });
        if drawn.cursor.is_some() {
            cursor = drawn.cursor;
        }
        lines.push(drawn.line);
    }

    frame.render_widget(Paragraph::new(lines).style(bg), area);
    if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_list_message() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " No tasks");
        assert!(app.hitboxes.is_empty());
    }

    #[test]
    fn one_line_per_task() {
        let mut app = app_with_tasks(&[("Buy milk", false), ("Walk dog", true)]);
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" [ ] Buy milk"));
        assert!(lines[1].starts_with(" [\u{2713}] Walk dog"));
        assert_eq!(app.hitboxes.len(), 2);
        assert_eq!(app.hitboxes[1].marker.y, 1);
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with_tasks(&[
            ("one", false),
            ("two", false),
            ("three", false),
            ("four", false),
        ]);
        app.cursor = 3;
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll, 2);
        assert!(output.contains("three"));
        assert!(output.contains("four"));
        assert!(!output.contains("one"));
        assert_eq!(app.hitboxes[0].row, 2);
    }
}
