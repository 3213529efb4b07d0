//! Pure contracts shared by the kernel and its adapters.

pub mod editor;
pub mod settings;

pub use editor::{CursorPosition, EditorEvent, EditorInput, TextBufferEditor};
pub use settings::{
    KeybindingRule, Settings, TerminalSettings, ThemeSettings, ViewportSettings,
    WorkspaceSettings,
};
