use crate::core::Command;

use super::{Action, AppState, Effect, FocusTarget, WorkspacePane};

mod files;
mod workspace;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Tick => DispatchResult::unchanged(),
            Action::ViewportChanged(viewport) => {
                if self.state.viewport == viewport {
                    return DispatchResult::unchanged();
                }
                let was_narrow = self.state.viewport.narrow;
                self.state.viewport = viewport;
                if was_narrow != viewport.narrow {
                    tracing::debug!(narrow = viewport.narrow, "viewport classification changed");
                    self.sync_narrow_pane();
                }
                DispatchResult::changed(true)
            }
            action @ (Action::InputAppend(_)
            | Action::InputBackspace
            | Action::InputSet(_)
            | Action::Submit { .. }
            | Action::AssistantReplied { .. }) => self.reduce_workspace_action(action),
            action @ (Action::ToggleFolder { .. }
            | Action::SelectFile { .. }
            | Action::SetContent { .. }
            | Action::EditorContentChanged { .. }
            | Action::EditorCursorMoved(_)
            | Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerClickRow { .. }) => self.reduce_file_action(action),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        let mut state_changed = false;
        let mut effects = Vec::new();

        match command {
            Command::Quit => {
                self.state.ui.should_quit = true;
                state_changed = true;
            }
            Command::ToggleSidebar => {
                self.state.layout.sidebar = self.state.layout.sidebar.toggled();
                if !self.state.layout.sidebar.is_expanded() {
                    self.state.layout.user_menu_open = false;
                }
                tracing::debug!(sidebar = ?self.state.layout.sidebar, "sidebar toggled");
                state_changed = true;
            }
            Command::ToggleUserMenu => {
                if self.state.layout.sidebar.is_expanded() {
                    self.state.layout.user_menu_open = !self.state.layout.user_menu_open;
                    state_changed = true;
                }
            }
            Command::Submit => {
                let text = self.state.workspace.input().to_string();
                return self.reduce_workspace_action(Action::Submit { text });
            }
            Command::GoBack => state_changed = self.go_back(),
            Command::ToggleFullscreen => {
                if self.state.workspace.is_building() {
                    self.state.workspace.fullscreen = !self.state.workspace.fullscreen;
                    state_changed = true;
                }
            }
            Command::NextChatTab => {
                if self.state.workspace.is_building() {
                    self.state.workspace.chat_tab = self.state.workspace.chat_tab.next();
                    state_changed = true;
                }
            }
            Command::NextViewTab => {
                if self.state.workspace.is_building() {
                    self.state.workspace.view_tab = self.state.workspace.view_tab.next();
                    if self.state.workspace.view_tab != super::ViewTab::Code
                        && self.state.ui.focus != FocusTarget::Input
                    {
                        self.state.ui.focus = FocusTarget::Input;
                        self.sync_narrow_pane();
                    }
                    state_changed = true;
                }
            }
            Command::UseShortcut(n) => state_changed = self.use_shortcut(n),
            Command::FocusNextPane => {
                let next = match self.state.ui.focus {
                    FocusTarget::Input => FocusTarget::Explorer,
                    FocusTarget::Explorer => FocusTarget::Editor,
                    FocusTarget::Editor => FocusTarget::Input,
                };
                state_changed = self.set_focus(next);
            }
            Command::FocusInput => state_changed = self.set_focus(FocusTarget::Input),
            Command::FocusExplorer => state_changed = self.set_focus(FocusTarget::Explorer),
            Command::FocusEditor => state_changed = self.set_focus(FocusTarget::Editor),
            Command::ExplorerUp => state_changed = self.state.files.move_selection(-1),
            Command::ExplorerDown => state_changed = self.state.files.move_selection(1),
            Command::ExplorerActivate => {
                let (changed, opened) = self.state.files.activate_selected();
                if opened {
                    effects.push(self.open_active_file());
                }
                state_changed = changed;
            }
            Command::SaveFile => {
                effects.push(Effect::SaveFile {
                    id: self.state.files.active_file().to_string(),
                });
            }
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    /// Explorer and editor only exist inside the building workspace's code tab.
    fn set_focus(&mut self, target: FocusTarget) -> bool {
        if target != FocusTarget::Input && !self.state.workspace.is_building() {
            return false;
        }
        let prev_focus = self.state.ui.focus;
        let prev_tab = self.state.workspace.view_tab;
        let prev_pane = self.state.workspace.narrow_pane;

        self.state.ui.focus = target;
        if target != FocusTarget::Input {
            self.state.workspace.view_tab = super::ViewTab::Code;
        }
        self.sync_narrow_pane();

        prev_focus != target
            || prev_tab != self.state.workspace.view_tab
            || prev_pane != self.state.workspace.narrow_pane
    }

    fn sync_narrow_pane(&mut self) {
        self.state.workspace.narrow_pane = match self.state.ui.focus {
            FocusTarget::Input => WorkspacePane::Chat,
            FocusTarget::Explorer | FocusTarget::Editor => WorkspacePane::Workspace,
        };
    }

    fn open_active_file(&mut self) -> Effect {
        let id = self.state.files.active_file().to_string();
        self.state.editor.cursor = Default::default();
        Effect::OpenInEditor {
            text: self.state.files.content(&id).to_string(),
            language: self.state.files.language_for(&id),
            id,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
