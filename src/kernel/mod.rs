//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod file_store;
pub mod language;
pub mod services;
pub mod sidebar;
pub mod state;
pub mod store;
pub mod viewport;

pub use action::Action;
pub use effect::Effect;
pub use file_store::FileStore;
pub use language::LanguageId;
pub use sidebar::{SidebarContent, UserMenuItem};
pub use state::{
    AppState, ChatMessage, ChatTab, EditorStatus, FocusTarget, LayoutState, Role, SidebarState,
    UiState, ViewTab, WorkspaceMode, WorkspacePane, WorkspaceState,
};
pub use store::{DispatchResult, Store};
pub use viewport::ViewportState;
