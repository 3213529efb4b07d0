use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(settings.keybindings.is_empty());
    assert_eq!(settings.viewport.cell_width_px, 8);
    assert_eq!(settings.workspace, WorkspaceSettings::default());
    assert_eq!(settings.workspace.reply_delay_ms, 800);
    assert!(!settings.workspace.clear_prompt_on_back);
    assert_eq!(settings.terminal, TerminalSettings::default());
}

#[test]
fn partial_sections_fill_in_missing_fields() {
    let json = r#"{
        "workspace": { "clear_prompt_on_back": true },
        "viewport": {},
        "keybindings": [
            { "key": "ctrl+k", "command": "toggleSidebar" },
            { "key": "enter", "command": "explorerActivate", "context": "explorer" }
        ]
    }"#;
    let settings: Settings = serde_json::from_str(json).unwrap();
    assert!(settings.workspace.clear_prompt_on_back);
    assert_eq!(settings.workspace.reply_delay_ms, 800);
    assert_eq!(settings.viewport.cell_width_px, 8);
    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context, None);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("explorer"));
}

#[test]
fn default_settings_serialize_and_reload() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    let settings: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(settings.theme.focus_border.as_deref(), Some("cyan"));
    assert_eq!(settings.theme.danger_fg.as_deref(), Some("light_red"));
}

#[test]
fn terminal_modes_can_be_switched_off_individually() {
    let settings: Settings =
        serde_json::from_str(r#"{ "terminal": { "mouse_capture": false } }"#).unwrap();
    assert!(!settings.terminal.mouse_capture);
    assert!(settings.terminal.bracketed_paste);
}
