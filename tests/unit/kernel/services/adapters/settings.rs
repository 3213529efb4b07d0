use super::*;

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("setting.json");

    ensure_settings_file_at(&path).unwrap();
    assert!(path.exists());
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.workspace.reply_delay_ms, 800);

    std::fs::write(&path, r#"{ "workspace": { "reply_delay_ms": 5 } }"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.workspace.reply_delay_ms, 5);
}

#[test]
fn malformed_settings_report_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(err.to_string().starts_with("invalid settings file"));
}

#[test]
fn missing_settings_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn parse_keybinding_reads_modifiers() {
    assert_eq!(
        parse_keybinding("ctrl+b"),
        Some(Key::ctrl(KeyCode::Char('b')))
    );
    assert_eq!(
        parse_keybinding("Alt + 2"),
        Some(Key::alt(KeyCode::Char('2')))
    );
    assert_eq!(
        parse_keybinding("ctrl+shift+p"),
        Some(Key::new(
            KeyCode::Char('p'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
}

#[test]
fn parse_keybinding_folds_uppercase_into_shift() {
    assert_eq!(
        parse_keybinding("P"),
        Some(Key::new(KeyCode::Char('p'), KeyModifiers::SHIFT))
    );
}

#[test]
fn parse_keybinding_named_keys() {
    assert_eq!(parse_keybinding("f11"), Some(Key::simple(KeyCode::F(11))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("escape"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(parse_keybinding("space"), Some(Key::simple(KeyCode::Char(' '))));
    assert_eq!(parse_keybinding("pagedown"), Some(Key::simple(KeyCode::PageDown)));
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+abc"), None);
    assert_eq!(parse_keybinding("fx"), None);
}

#[test]
fn parse_command_trims() {
    assert_eq!(parse_command(" toggleSidebar "), Some(Command::ToggleSidebar));
    assert_eq!(parse_command("nope"), None);
}

#[test]
fn log_dir_ends_with_logs() {
    assert!(get_log_dir().ends_with("logs"));
}

#[test]
fn formatted_keys_parse_back() {
    for key in [
        Key::ctrl(KeyCode::Char('b')),
        Key::alt(KeyCode::Char('4')),
        Key::simple(KeyCode::F(6)),
        Key::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        Key::simple(KeyCode::Char(' ')),
    ] {
        assert_eq!(parse_keybinding(&key.to_string()), Some(key));
    }
}
