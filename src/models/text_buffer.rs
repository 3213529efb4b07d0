//! Text buffer behind the embedded editor.
//!
//! - text storage (Rope)
//! - grapheme-aware cursor
//! - whole-buffer change notifications for the file store

use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::editor::{
    CursorPosition, EditorEvent, EditorInput, TextBufferEditor,
};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

const TAB_SIZE: usize = 2;

pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// Folds `\r\n` and lone `\r` into `\n`. Bracketed paste often carries `\r` line breaks.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    language: LanguageId,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            language: LanguageId::default(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            language: LanguageId::default(),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Zero-based (row, grapheme column).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.last_row());
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    pub fn cursor_position(&self) -> CursorPosition {
        CursorPosition::from_zero_based(self.cursor.0, self.cursor.1)
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        if row < self.rope.len_lines() {
            Some(slice_to_cow(self.rope.line(row)))
        } else {
            None
        }
    }

    fn last_row(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let Some(line) = self.line(row) else {
            return 0;
        };
        let without_newline = line.trim_end_matches(&['\n', '\r'][..]);
        without_newline.graphemes(true).count()
    }

    fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let Some(line) = self.line(row) else {
            return 0;
        };
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    fn cursor_char_offset(&self) -> usize {
        let (row, col) = self.cursor;
        self.rope.line_to_char(row) + self.grapheme_to_char_index(row, col)
    }

    pub fn insert_str(&mut self, s: &str) {
        let s = normalize_line_endings(s);
        let s = s.as_ref();
        let (row, col) = self.cursor;
        let offset = self.cursor_char_offset();
        self.rope.insert(offset, s);

        let newlines = s.matches('\n').count();
        self.cursor = match s.rfind('\n') {
            Some(last) => (row + newlines, s[last + 1..].graphemes(true).count()),
            None => (row, col + s.graphemes(true).count()),
        };
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;
        if row == 0 && col == 0 {
            return false;
        }

        let end = self.cursor_char_offset();
        if col == 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let start =
                self.rope.line_to_char(row - 1) + self.grapheme_to_char_index(row - 1, prev_len);
            self.rope.remove(start..end);
            self.cursor = (row - 1, prev_len);
        } else {
            let start = self.rope.line_to_char(row) + self.grapheme_to_char_index(row, col - 1);
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
        }
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let line_len = self.line_grapheme_len(row);
        let start = self.cursor_char_offset();

        let end = if col < line_len {
            self.rope.line_to_char(row) + self.grapheme_to_char_index(row, col + 1)
        } else if row < self.last_row() {
            self.rope.line_to_char(row + 1)
        } else {
            return false;
        };

        self.rope.remove(start..end);
        true
    }

    pub fn move_left(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor = (row, col - 1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_grapheme_len(row - 1));
        } else {
            return false;
        }
        true
    }

    pub fn move_right(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.cursor = (row, col + 1);
        } else if row < self.last_row() {
            self.cursor = (row + 1, 0);
        } else {
            return false;
        }
        true
    }

    pub fn move_up(&mut self) -> bool {
        let (row, col) = self.cursor;
        if row == 0 {
            return false;
        }
        self.cursor = (row - 1, col.min(self.line_grapheme_len(row - 1)));
        true
    }

    pub fn move_down(&mut self) -> bool {
        let (row, col) = self.cursor;
        if row >= self.last_row() {
            return false;
        }
        self.cursor = (row + 1, col.min(self.line_grapheme_len(row + 1)));
        true
    }

    pub fn move_line_start(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor.1 = 0;
        prev != self.cursor
    }

    pub fn move_line_end(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor.1 = self.line_grapheme_len(self.cursor.0);
        prev != self.cursor
    }
}

impl TextBufferEditor for TextBuffer {
    fn load(&mut self, text: &str, language: LanguageId) {
        self.rope = Rope::from_str(text);
        self.cursor = (0, 0);
        self.language = language;
    }

    fn apply(&mut self, input: EditorInput) -> Vec<EditorEvent> {
        let before = self.cursor;

        let edited = match input {
            EditorInput::Insert(c) => {
                self.insert_char(c);
                true
            }
            EditorInput::Newline => {
                self.insert_char('\n');
                true
            }
            EditorInput::Tab => {
                self.insert_str(&" ".repeat(TAB_SIZE));
                true
            }
            EditorInput::Paste(text) => {
                if text.is_empty() {
                    false
                } else {
                    self.insert_str(&text);
                    true
                }
            }
            EditorInput::Backspace => self.delete_backward(),
            EditorInput::Delete => self.delete_forward(),
            EditorInput::Left => {
                self.move_left();
                false
            }
            EditorInput::Right => {
                self.move_right();
                false
            }
            EditorInput::Up => {
                self.move_up();
                false
            }
            EditorInput::Down => {
                self.move_down();
                false
            }
            EditorInput::Home => {
                self.move_line_start();
                false
            }
            EditorInput::End => {
                self.move_line_end();
                false
            }
        };

        let mut events = Vec::with_capacity(2);
        if edited {
            events.push(EditorEvent::Changed(self.text()));
        }
        if edited || self.cursor != before {
            events.push(EditorEvent::CursorMoved(self.cursor_position()));
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
