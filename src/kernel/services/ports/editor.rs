//! Contract for the embedded text editor.
//!
//! The core never looks inside the editor: it hands over `(text, language)`
//! and receives whole-buffer change notifications plus cursor reports.

use crate::kernel::language::LanguageId;

/// 1-indexed line/column, as shown in the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl CursorPosition {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
        }
    }

    pub fn from_zero_based(row: usize, col: usize) -> Self {
        let line = u32::try_from(row).unwrap_or(u32::MAX - 1) + 1;
        let column = u32::try_from(col).unwrap_or(u32::MAX - 1) + 1;
        Self { line, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    Insert(char),
    Paste(String),
    Newline,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Full buffer contents after an edit.
    Changed(String),
    CursorMoved(CursorPosition),
}

pub trait TextBufferEditor {
    fn load(&mut self, text: &str, language: LanguageId);
    fn apply(&mut self, input: EditorInput) -> Vec<EditorEvent>;
}
