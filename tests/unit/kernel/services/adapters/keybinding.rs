use super::*;
use crossterm::event::KeyModifiers;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn defaults_cover_global_commands() {
    let service = KeybindingService::with_defaults();
    let global = KeybindingContext::Global;
    assert_eq!(
        service.resolve(global, &Key::ctrl(KeyCode::Char('b'))),
        Some(&Command::ToggleSidebar)
    );
    assert_eq!(
        service.resolve(global, &Key::simple(KeyCode::F(11))),
        Some(&Command::ToggleFullscreen)
    );
    assert_eq!(
        service.resolve(global, &Key::simple(KeyCode::Esc)),
        Some(&Command::GoBack)
    );
    assert_eq!(
        service.resolve(global, &Key::alt(KeyCode::Char('3'))),
        Some(&Command::UseShortcut(3))
    );
}

#[test]
fn context_maps_fall_back_to_global() {
    let service = KeybindingService::with_defaults();
    let enter = Key::simple(KeyCode::Enter);

    assert_eq!(
        service.resolve(KeybindingContext::Input, &enter),
        Some(&Command::Submit)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &enter),
        Some(&Command::ExplorerActivate)
    );
    assert_eq!(service.resolve(KeybindingContext::Editor, &enter), None);
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('s'))),
        Some(&Command::SaveFile)
    );
}

#[test]
fn plain_letters_only_bound_in_explorer() {
    let service = KeybindingService::with_defaults();
    let j = Key::simple(KeyCode::Char('j'));
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &j),
        Some(&Command::ExplorerDown)
    );
    assert_eq!(service.resolve(KeybindingContext::Input, &j), None);
    assert_eq!(service.resolve(KeybindingContext::Editor, &j), None);
}

#[test]
fn rules_override_and_unbind() {
    let rules = [
        rule("ctrl+k", "toggleSidebar", None),
        rule("esc", "", None),
        rule("ctrl+enter", "submit", Some("composer")),
    ];
    let service = KeybindingService::with_rules(&rules);

    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('k'))),
        Some(&Command::ToggleSidebar)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Esc)),
        None
    );
    assert_eq!(
        service.resolve(
            KeybindingContext::Input,
            &Key::new(KeyCode::Enter, KeyModifiers::CONTROL)
        ),
        Some(&Command::Submit)
    );
}

#[test]
fn invalid_rules_are_skipped() {
    let mut service = KeybindingService::with_defaults();
    let before = service.bound_count(KeybindingContext::Global);
    let applied = service.apply_rules(&[
        rule("ctrl+", "quit", None),
        rule("ctrl+x", "formatDocument", None),
        rule("ctrl+x", "quit", Some("terminal")),
        rule("ctrl+x", "quit", Some("global")),
    ]);
    assert_eq!(applied, 1);
    assert_eq!(service.bound_count(KeybindingContext::Global), before + 1);
}

#[test]
fn context_names_parse() {
    assert_eq!(KeybindingContext::parse(" Prompt "), Some(KeybindingContext::Input));
    assert_eq!(KeybindingContext::parse("files"), Some(KeybindingContext::Explorer));
    assert_eq!(KeybindingContext::parse("editor"), Some(KeybindingContext::Editor));
    assert_eq!(KeybindingContext::parse("panel"), None);
}

#[test]
fn context_unbind_masks_global_key_only_there() {
    let rules = [rule("ctrl+s", "", Some("editor")), rule("k", "", Some("explorer"))];
    let service = KeybindingService::with_rules(&rules);
    let save = Key::ctrl(KeyCode::Char('s'));

    assert_eq!(service.resolve(KeybindingContext::Editor, &save), None);
    assert_eq!(
        service.resolve(KeybindingContext::Input, &save),
        Some(&Command::SaveFile)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &save),
        Some(&Command::SaveFile)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::Char('k'))),
        None
    );
    assert_eq!(service.bound_count(KeybindingContext::Explorer), 5);
}

#[test]
fn rebinding_after_unbind_restores_context_key() {
    let mut service = KeybindingService::with_defaults();
    let save = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(
        service.unbind(KeybindingContext::Editor, &save),
        Some(Command::SaveFile)
    );
    service.bind(KeybindingContext::Editor, save, Command::Quit);
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &save),
        Some(&Command::Quit)
    );
}
