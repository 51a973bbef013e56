/// What the completion marker shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerView {
    /// Inspection identifier (`marker-{index}`)
    pub id: String,
    pub done: bool,
    pub check_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleView<'a> {
    /// Buffer contents (the task title unless an edit is in progress)
    pub text: &'a str,
    pub editable: bool,
    pub focused: bool,
    /// Drawn in the done style (struck through)
    pub done: bool,
    /// Byte cursor into `text`, present only while editable and focused
    pub cursor: Option<usize>,
}

/// The edit/cancel control, which swaps glyph with the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditControl {
    StartEditing,
    CancelEditing,
}

impl EditControl {
    pub fn glyph(self) -> &'static str {
        match self {
            EditControl::StartEditing => "\u{270E}",
            EditControl::CancelEditing => "\u{2715}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteControl {
    pub enabled: bool,
    pub dimmed: bool,
}

impl DeleteControl {
    pub const GLYPH: &'static str = "\u{232B}";
}

/// Snapshot of everything a row draws, independent of the UI toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    /// Inspection identifier of the touch target (`button-{index}`)
    pub button_id: String,
    pub marker: MarkerView,
    pub title: TitleView<'a>,
    pub edit_control: EditControl,
    pub delete: DeleteControl,
}
