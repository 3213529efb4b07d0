//! In-memory project: tree, contents, expansion, active file.
//!
//! One `FileStore` belongs to one workspace session. All mutation goes through
//! the methods below; invalid targets are ignored and reported as `false`.

use rustc_hash::FxHashMap;

use crate::kernel::language::LanguageId;
use crate::models::seed;
use crate::models::{ExpansionState, FileTree, FileTreeError, FileTreeRow, NodeKind};

#[derive(Debug, Clone)]
pub struct FileStore {
    tree: FileTree,
    contents: FxHashMap<String, String>,
    expanded: ExpansionState,
    active: String,
    rows: Vec<FileTreeRow>,
    selected_row: usize,
    scroll_offset: usize,
    view_height: usize,
}

impl FileStore {
    /// `active` must name a file node in `tree`.
    pub fn new(
        tree: FileTree,
        contents: impl IntoIterator<Item = (String, String)>,
        expanded: impl IntoIterator<Item = String>,
        active: &str,
    ) -> Result<Self, FileTreeError> {
        if tree.kind_of(active) != Some(NodeKind::File) {
            return Err(FileTreeError::Parse(format!(
                "default active file {active} is not a file node"
            )));
        }

        let mut store = Self {
            tree,
            contents: contents.into_iter().collect(),
            expanded: expanded.into_iter().map(|id| (id, true)).collect(),
            active: active.to_string(),
            rows: Vec::new(),
            selected_row: 0,
            scroll_offset: 0,
            view_height: 1,
        };
        store.rebuild_rows();
        store.selected_row = store.row_of(active).unwrap_or(0);
        Ok(store)
    }

    pub fn seeded() -> Result<Self, FileTreeError> {
        Self::new(
            seed::tree()?,
            seed::contents()
                .into_iter()
                .map(|(id, text)| (id.to_string(), text.to_string())),
            seed::DEFAULT_EXPANDED.iter().map(|id| id.to_string()),
            seed::DEFAULT_ACTIVE_FILE,
        )
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn active_file(&self) -> &str {
        &self.active
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn toggle_folder(&mut self, id: &str) -> bool {
        if self.tree.kind_of(id) != Some(NodeKind::Folder) {
            tracing::debug!(id, "toggle_folder ignored: not a folder");
            return false;
        }

        let entry = self.expanded.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        let selected_id = self.rows.get(self.selected_row).map(|r| r.id.clone());
        self.rebuild_rows();
        if let Some(row) = selected_id.and_then(|sid| self.row_of(&sid)) {
            self.selected_row = row;
        } else if let Some(row) = self.row_of(id) {
            self.selected_row = row;
        }
        self.clamp_selection();
        true
    }

    pub fn select_file(&mut self, id: &str) -> bool {
        if self.active == id {
            return false;
        }
        if self.tree.kind_of(id) != Some(NodeKind::File) {
            tracing::debug!(id, "select_file ignored: not a file");
            return false;
        }

        self.active = id.to_string();
        if let Some(row) = self.row_of(id) {
            self.selected_row = row;
            self.ensure_selected_visible();
        }
        true
    }

    /// Missing entries read as empty text.
    pub fn content(&self, id: &str) -> &str {
        self.contents.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn active_content(&self) -> &str {
        self.content(&self.active)
    }

    /// Only the active file accepts writes.
    pub fn set_content(&mut self, id: &str, text: String) -> bool {
        if id != self.active {
            tracing::debug!(id, active = %self.active, "set_content rejected: not the active file");
            return false;
        }
        match self.contents.get(id) {
            Some(current) if *current == text => false,
            _ => {
                self.contents.insert(id.to_string(), text);
                true
            }
        }
    }

    pub fn language_for(&self, id: &str) -> LanguageId {
        match self.tree.lookup(id) {
            Some(node) => LanguageId::from_extension(node.extension.as_deref()),
            None => LanguageId::from_file_name(id),
        }
    }

    // ---- explorer cursor ----

    pub fn rows(&self) -> &[FileTreeRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.ensure_selected_visible();
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }
        let prev = self.selected_row;
        let last = self.rows.len() - 1;
        self.selected_row = if delta > 0 {
            prev.saturating_add(delta as usize).min(last)
        } else {
            prev.saturating_sub(delta.unsigned_abs())
        };
        self.ensure_selected_visible();
        prev != self.selected_row
    }

    /// Toggles the selected folder or opens the selected file.
    /// Returns `(state_changed, opened_file)`.
    pub fn activate_selected(&mut self) -> (bool, bool) {
        let Some(row) = self.rows.get(self.selected_row) else {
            return (false, false);
        };
        let id = row.id.clone();
        if row.is_folder {
            (self.toggle_folder(&id), false)
        } else {
            let opened = self.select_file(&id);
            (opened, opened)
        }
    }

    pub fn click_row(&mut self, row: usize) -> (bool, bool) {
        if row >= self.rows.len() {
            return (false, false);
        }
        let moved = self.selected_row != row;
        self.selected_row = row;
        let (changed, opened) = self.activate_selected();
        (moved || changed, opened)
    }

    fn row_of(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    fn rebuild_rows(&mut self) {
        self.rows = self.tree.flatten_for_view(&self.expanded);
    }

    fn clamp_selection(&mut self) {
        self.selected_row = self.selected_row.min(self.rows.len().saturating_sub(1));
        self.ensure_selected_visible();
    }

    fn ensure_selected_visible(&mut self) {
        if self.selected_row < self.scroll_offset {
            self.scroll_offset = self.selected_row;
        } else if self.selected_row >= self.scroll_offset + self.view_height {
            self.scroll_offset = self.selected_row + 1 - self.view_height;
        }
        let max_offset = self.rows.len().saturating_sub(self.view_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/file_store.rs"]
mod tests;
