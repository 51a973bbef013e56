use crate::util::unicode;

/// A cursor-level edit applied to the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    InsertStr(String),
    Backspace,
    DeleteForward,
    DeleteWordBack,
    Left,
    Right,
    Home,
    End,
}

/// Uncommitted title text plus a byte cursor that always sits on a grapheme boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    /// A buffer holding `text` with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        EditBuffer { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text; cursor moves to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn apply(&mut self, op: EditOp) {
        match op {
            EditOp::Insert(c) => {
                self.text.insert(self.cursor, single_line_char(c));
                self.cursor += single_line_char(c).len_utf8();
            }
            EditOp::InsertStr(s) => {
                let clean: String = s.replace("\r\n", " ").chars().map(single_line_char).collect();
                self.text.insert_str(self.cursor, &clean);
                self.cursor += clean.len();
            }
            EditOp::Backspace => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                }
            }
            EditOp::DeleteForward => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
                    self.text.replace_range(self.cursor..next, "");
                }
            }
            EditOp::DeleteWordBack => {
                let start = unicode::word_boundary_left(&self.text, self.cursor);
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            EditOp::Left => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
                    self.cursor = prev;
                }
            }
            EditOp::Right => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
                    self.cursor = next;
                }
            }
            EditOp::Home => self.cursor = 0,
            EditOp::End => self.cursor = self.text.len(),
        }
    }
}

/// Titles are single-line: control whitespace becomes a plain space
fn single_line_char(c: char) -> char {
    if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf_at(text: &str, cursor: usize) -> EditBuffer {
        let mut b = EditBuffer::new(text);
        b.apply(EditOp::Home);
        for _ in 0..cursor {
            b.apply(EditOp::Right);
        }
        b
    }

    #[test]
    fn new_puts_cursor_at_end() {
        let b = EditBuffer::new("Buy milk");
        assert_eq!(b.cursor(), 8);
    }

    #[test]
    fn insert_in_middle() {
        let mut b = buf_at("Buy milk", 4);
        for c in "oat ".chars() {
            b.apply(EditOp::Insert(c));
        }
        assert_eq!(b.text(), "Buy oat milk");
        assert_eq!(b.cursor(), 8);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut b = EditBuffer::new("cafe\u{0301}");
        b.apply(EditOp::Backspace);
        assert_eq!(b.text(), "caf");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut b = buf_at("abc", 0);
        b.apply(EditOp::Backspace);
        assert_eq!(b.text(), "abc");
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn delete_forward_keeps_cursor() {
        let mut b = buf_at("abc", 1);
        b.apply(EditOp::DeleteForward);
        assert_eq!(b.text(), "ac");
        assert_eq!(b.cursor(), 1);
        b.apply(EditOp::End);
        b.apply(EditOp::DeleteForward);
        assert_eq!(b.text(), "ac");
    }

    #[test]
    fn delete_word_back() {
        let mut b = EditBuffer::new("Buy oat milk");
        b.apply(EditOp::DeleteWordBack);
        assert_eq!(b.text(), "Buy oat ");
        b.apply(EditOp::DeleteWordBack);
        assert_eq!(b.text(), "Buy ");
    }

    #[test]
    fn pasted_newlines_become_spaces() {
        let mut b = EditBuffer::new("");
        b.apply(EditOp::InsertStr("one\ntwo\r\nthree".into()));
        assert_eq!(b.text(), "one two three");
        assert_eq!(b.cursor(), b.text().len());
    }

    #[test]
    fn set_text_can_clear() {
        let mut b = EditBuffer::new("Buy milk");
        b.set_text("");
        assert_eq!(b.text(), "");
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn cursor_moves_over_wide_chars() {
        let mut b = EditBuffer::new("a你");
        b.apply(EditOp::Left);
        assert_eq!(b.cursor(), 1);
        b.apply(EditOp::Left);
        assert_eq!(b.cursor(), 0);
        b.apply(EditOp::Left);
        assert_eq!(b.cursor(), 0);
    }
}
