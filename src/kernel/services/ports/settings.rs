use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub workspace: WorkspaceSettings,
    #[serde(default)]
    pub terminal: TerminalSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Logical pixels per terminal column.
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
}

fn default_cell_width_px() -> u32 {
    8
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width_px(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default)]
    pub clear_prompt_on_back: bool,
}

fn default_reply_delay_ms() -> u64 {
    800
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            clear_prompt_on_back: false,
        }
    }
}

/// Input modes requested from the terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSettings {
    /// Clicks on the sidebar, explorer and editor.
    #[serde(default = "enabled")]
    pub mouse_capture: bool,
    /// Multi-line paste into the prompt and editor as one event.
    #[serde(default = "enabled")]
    pub bracketed_paste: bool,
}

fn enabled() -> bool {
    true
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            mouse_capture: true,
            bracketed_paste: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("blue".to_string()),
            muted_fg: Some("gray".to_string()),
            header_fg: Some("white".to_string()),
            selected_bg: Some("dark_gray".to_string()),
            selected_fg: Some("white".to_string()),
            danger_fg: Some("light_red".to_string()),
            premium_fg: Some("yellow".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
