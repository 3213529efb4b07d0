//! Semantic commands, independent of the keys that trigger them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // layout
    ToggleSidebar,
    ToggleUserMenu,

    // workspace
    Submit,
    GoBack,
    ToggleFullscreen,
    NextChatTab,
    NextViewTab,
    UseShortcut(u8),

    // focus
    FocusNextPane,
    FocusInput,
    FocusExplorer,
    FocusEditor,

    // explorer
    ExplorerUp,
    ExplorerDown,
    ExplorerActivate,

    // system
    SaveFile,
    Quit,
}

impl Command {
    pub fn name(&self) -> String {
        let name = match self {
            Command::ToggleSidebar => "toggleSidebar",
            Command::ToggleUserMenu => "toggleUserMenu",
            Command::Submit => "submit",
            Command::GoBack => "goBack",
            Command::ToggleFullscreen => "toggleFullscreen",
            Command::NextChatTab => "nextChatTab",
            Command::NextViewTab => "nextViewTab",
            Command::UseShortcut(n) => return format!("useShortcut.{n}"),
            Command::FocusNextPane => "focusNextPane",
            Command::FocusInput => "focusInput",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::SaveFile => "saveFile",
            Command::Quit => "quit",
        };
        name.to_string()
    }

    pub fn from_name(name: &str) -> Option<Command> {
        if let Some(index) = name.strip_prefix("useShortcut.") {
            return index.parse().ok().map(Command::UseShortcut);
        }

        let command = match name {
            "toggleSidebar" => Command::ToggleSidebar,
            "toggleUserMenu" => Command::ToggleUserMenu,
            "submit" => Command::Submit,
            "goBack" => Command::GoBack,
            "toggleFullscreen" => Command::ToggleFullscreen,
            "nextChatTab" => Command::NextChatTab,
            "nextViewTab" => Command::NextViewTab,
            "focusNextPane" => Command::FocusNextPane,
            "focusInput" => Command::FocusInput,
            "focusExplorer" => Command::FocusExplorer,
            "focusEditor" => Command::FocusEditor,
            "explorerUp" => Command::ExplorerUp,
            "explorerDown" => Command::ExplorerDown,
            "explorerActivate" => Command::ExplorerActivate,
            "saveFile" => Command::SaveFile,
            "quit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
