use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::row::{DeleteControl, EditControl, RowView, TitleView};
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Column of the title field within a row: ` [x] title`
pub const TITLE_X: u16 = 5;
/// Trailing controls: ` ✎ │ ⌫ `
pub const CONTROLS_W: u16 = 7;

/// One row turned into a styled line plus the screen regions of its controls
#[derive(Debug, Clone)]
pub struct DrawnRow {
    pub line: Line<'static>,
    pub marker: Rect,
    pub title: Rect,
    pub edit: Rect,
    pub delete: Rect,
    /// Where the terminal cursor belongs, when the title is focused
    pub cursor: Option<Position>,
}

/// Lay out a single row in `area` (one line high).
pub fn draw_row(view: &RowView, theme: &Theme, is_cursor: bool, area: Rect) -> DrawnRow {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);
    let title_w = area.width.saturating_sub(TITLE_X + CONTROLS_W);
    let controls_x = area.x + TITLE_X + title_w;

    let mut spans: Vec<Span<'static>> = Vec::with_capacity(10);
    spans.push(Span::styled(" ", base));

    // Marker
    if view.marker.check_visible {
        spans.push(Span::styled(
            "[\u{2713}]",
            base.fg(theme.done).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled("[ ]", base.fg(theme.dim)));
    }
    spans.push(Span::styled(" ", base));

    // Title field
    let (text, cursor_col) = fit_title(&view.title, title_w as usize);
    let text_w = unicode::display_width(&text);
    spans.push(Span::styled(text, title_style(&view.title, theme, base)));
    let pad_style = if view.title.editable {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    };
    let pad = (title_w as usize).saturating_sub(text_w);
    if pad > 0 {
        spans.push(Span::styled(" ".repeat(pad), pad_style));
    }

    // Controls
    let edit_style = match view.edit_control {
        EditControl::CancelEditing => base.fg(theme.highlight),
        EditControl::StartEditing => base.fg(theme.text),
    };
    let delete_style = if view.delete.dimmed {
        base.fg(theme.dim).add_modifier(Modifier::DIM)
    } else {
        base.fg(theme.text)
    };
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(view.edit_control.glyph(), edit_style));
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled("\u{2502}", base.fg(theme.divider)));
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(DeleteControl::GLYPH, delete_style));
    spans.push(Span::styled(" ", base));

    let cell = |x: u16, w: u16| Rect::new(x, area.y, w, 1).intersection(area);
    DrawnRow {
        line: Line::from(spans),
        marker: cell(area.x + 1, 3),
        title: cell(area.x + TITLE_X, title_w),
        edit: cell(controls_x, 3),
        delete: cell(controls_x + 4, 3),
        cursor: cursor_col.map(|col| Position::new(area.x + TITLE_X + col, area.y)),
    }
}

fn title_style(title: &TitleView, theme: &Theme, base: Style) -> Style {
    let style = base.fg(theme.title_color(title.done));
    if title.editable {
        let style = if title.focused {
            style.fg(theme.text_bright)
        } else {
            style
        };
        style.add_modifier(Modifier::UNDERLINED)
    } else if title.done {
        style.add_modifier(Modifier::CROSSED_OUT)
    } else {
        style
    }
}

/// Text to show in a title field `width` cells wide, and the cursor column
/// within it when the field is focused. A focused field scrolls to keep the
/// cursor visible; otherwise long titles are truncated with `…`.
fn fit_title(title: &TitleView, width: usize) -> (String, Option<u16>) {
    if width == 0 {
        return (String::new(), title.cursor.map(|_| 0));
    }
    match title.cursor {
        Some(cursor) => {
            let start = unicode::scroll_start_for_cursor(title.text, cursor, width);
            let visible = unicode::prefix_within_width(&title.text[start..], width);
            let col = unicode::display_width(&title.text[start..cursor.min(title.text.len())]);
            (visible.to_string(), Some(col as u16))
        }
        None => (unicode::truncate_to_width(title.text, width), None),
    }
}
