use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn reduce_file_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ToggleFolder { id } => {
                super::DispatchResult::changed(self.state.files.toggle_folder(&id))
            }
            Action::SelectFile { id } => {
                if !self.state.files.select_file(&id) {
                    return super::DispatchResult::unchanged();
                }
                tracing::debug!(id = %id, "active file changed");
                super::DispatchResult {
                    effects: vec![self.open_active_file()],
                    state_changed: true,
                }
            }
            Action::SetContent { id, text } => {
                super::DispatchResult::changed(self.state.files.set_content(&id, text))
            }
            Action::EditorContentChanged { text } => {
                let active = self.state.files.active_file().to_string();
                super::DispatchResult::changed(self.state.files.set_content(&active, text))
            }
            Action::EditorCursorMoved(position) => {
                if self.state.editor.cursor == position {
                    return super::DispatchResult::unchanged();
                }
                self.state.editor.cursor = position;
                super::DispatchResult::changed(true)
            }
            Action::ExplorerSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.files.set_view_height(height))
            }
            Action::ExplorerClickRow { row } => {
                let focus_changed = self.state.ui.focus != FocusTarget::Explorer;
                self.state.ui.focus = FocusTarget::Explorer;
                let (changed, opened) = self.state.files.click_row(row);
                let effects = if opened {
                    vec![self.open_active_file()]
                } else {
                    Vec::new()
                };
                super::DispatchResult {
                    effects,
                    state_changed: changed || focus_changed,
                }
            }
            _ => super::DispatchResult::unchanged(),
        }
    }
}
