use crate::core::Command;
use crate::kernel::services::ports::editor::CursorPosition;
use crate::kernel::viewport::ViewportState;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    Tick,
    ViewportChanged(ViewportState),

    // workspace input
    InputAppend(char),
    InputBackspace,
    InputSet(String),
    Submit {
        text: String,
    },
    AssistantReplied {
        conversation: u64,
    },

    // file store
    ToggleFolder {
        id: String,
    },
    SelectFile {
        id: String,
    },
    SetContent {
        id: String,
        text: String,
    },
    EditorContentChanged {
        text: String,
    },
    EditorCursorMoved(CursorPosition),

    // explorer
    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerClickRow {
        row: usize,
    },
}
