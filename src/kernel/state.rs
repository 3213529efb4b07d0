use crate::kernel::file_store::FileStore;
use crate::kernel::services::ports::editor::CursorPosition;
use crate::kernel::services::ports::settings::WorkspaceSettings;
use crate::kernel::sidebar::SidebarContent;
use crate::kernel::viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input,
    Explorer,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Expanded,
    Collapsed,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    pub sidebar: SidebarState,
    pub user_menu_open: bool,
}

impl LayoutState {
    /// Reads the viewport once; later viewport changes never touch the sidebar.
    pub fn mount(narrow: bool) -> Self {
        Self {
            sidebar: if narrow {
                SidebarState::Collapsed
            } else {
                SidebarState::Expanded
            },
            user_menu_open: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceMode {
    Landing,
    Building,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTab {
    Chat,
    Files,
}

impl ChatTab {
    pub fn next(self) -> Self {
        match self {
            Self::Chat => Self::Files,
            Self::Files => Self::Chat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    Preview,
    Code,
}

impl ViewTab {
    pub fn next(self) -> Self {
        match self {
            Self::Preview => Self::Code,
            Self::Code => Self::Preview,
        }
    }
}

/// Pane shown when the viewport is too narrow for the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspacePane {
    Chat,
    Workspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

pub const ASSISTANT_PLACEHOLDER: &str = "I'll help you build that. Let me generate the code...";

pub const SHORTCUTS: [&str; 4] = [
    "Clone a Screenshot",
    "Import From figma",
    "Upload a Project",
    "Sign Up From",
];

#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub mode: WorkspaceMode,
    /// Landing prompt input.
    pub prompt: String,
    /// Follow-up input shown under the transcript while building.
    pub composer: String,
    pub build_title: String,
    pub transcript: Vec<ChatMessage>,
    pub conversation: u64,
    pub fullscreen: bool,
    pub chat_tab: ChatTab,
    pub view_tab: ViewTab,
    pub narrow_pane: WorkspacePane,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            mode: WorkspaceMode::Landing,
            prompt: String::new(),
            composer: String::new(),
            build_title: String::new(),
            transcript: Vec::new(),
            conversation: 0,
            fullscreen: false,
            chat_tab: ChatTab::Chat,
            view_tab: ViewTab::Code,
            narrow_pane: WorkspacePane::Chat,
        }
    }
}

impl WorkspaceState {
    pub fn is_building(&self) -> bool {
        self.mode == WorkspaceMode::Building
    }

    /// Input that belongs to the current mode.
    pub fn input(&self) -> &str {
        match self.mode {
            WorkspaceMode::Landing => &self.prompt,
            WorkspaceMode::Building => &self.composer,
        }
    }

    pub fn input_mut(&mut self) -> &mut String {
        match self.mode {
            WorkspaceMode::Landing => &mut self.prompt,
            WorkspaceMode::Building => &mut self.composer,
        }
    }

    /// Mirrors a disabled submit button.
    pub fn can_submit(&self) -> bool {
        !self.input().trim().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorStatus {
    pub cursor: CursorPosition,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Input,
            should_quit: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub viewport: ViewportState,
    pub layout: LayoutState,
    pub sidebar: SidebarContent,
    pub workspace: WorkspaceState,
    pub files: FileStore,
    pub editor: EditorStatus,
    pub ui: UiState,
    pub config: WorkspaceSettings,
}

impl AppState {
    pub fn new(viewport: ViewportState, files: FileStore, config: WorkspaceSettings) -> Self {
        Self {
            layout: LayoutState::mount(viewport.narrow),
            viewport,
            sidebar: SidebarContent::standard(),
            workspace: WorkspaceState::default(),
            files,
            editor: EditorStatus::default(),
            ui: UiState::default(),
            config,
        }
    }

    /// Single-pane arrangement for the building workspace.
    pub fn single_pane(&self) -> bool {
        self.viewport.narrow
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
