use super::*;
use crate::kernel::services::ports::CursorPosition;
use crate::kernel::{SidebarState, WorkspaceMode};
use crate::models::seed;
use crate::views::landing::HEADLINE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn workbench(width_px: u32) -> Workbench {
    Workbench::new(&Settings::default(), ViewportSignal::measured(width_px)).unwrap()
}

fn press(workbench: &mut Workbench, code: KeyCode, modifiers: KeyModifiers) -> EventResult {
    workbench.handle_input(&InputEvent::Key(KeyEvent::new(code, modifiers)))
}

fn type_text(workbench: &mut Workbench, text: &str) {
    for ch in text.chars() {
        let _ = press(workbench, KeyCode::Char(ch), KeyModifiers::NONE);
    }
}

fn click(workbench: &mut Workbench, column: u16, row: u16) -> EventResult {
    workbench.handle_input(&InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn render_text(workbench: &mut Workbench, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn start_building(workbench: &mut Workbench, prompt: &str) {
    type_text(workbench, prompt);
    let _ = press(workbench, KeyCode::Enter, KeyModifiers::NONE);
}

#[test]
fn mounts_on_landing_with_active_file_loaded() {
    let workbench = workbench(1200);
    assert_eq!(workbench.state().workspace.mode, WorkspaceMode::Landing);
    assert_eq!(workbench.focus(), FocusTarget::Input);
    assert_eq!(workbench.state().layout.sidebar, SidebarState::Expanded);
    assert_eq!(workbench.editor_text(), seed::SIDEBAR_TSX);
    assert_eq!(workbench.viewport().subscribers(), 1);
    assert_eq!(workbench.next_deadline(), None);
}

#[test]
fn narrow_mount_collapses_sidebar() {
    let workbench = workbench(500);
    assert_eq!(workbench.state().layout.sidebar, SidebarState::Collapsed);
}

#[test]
fn typing_and_enter_start_building_and_schedule_reply() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "Build a todo app");

    let workspace = &workbench.state().workspace;
    assert_eq!(workspace.mode, WorkspaceMode::Building);
    assert_eq!(workspace.build_title, "Build a todo app");
    assert_eq!(workspace.transcript.len(), 1);
    assert!(workbench.next_deadline().is_some());

    assert!(!workbench.tick(Instant::now()));
    assert!(workbench.tick(Instant::now() + Duration::from_secs(5)));
    assert_eq!(workbench.state().workspace.transcript.len(), 2);
    assert_eq!(workbench.next_deadline(), None);
}

#[test]
fn going_back_drops_pending_reply() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "first");
    let _ = press(&mut workbench, KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(workbench.state().workspace.mode, WorkspaceMode::Landing);
    assert_eq!(workbench.state().workspace.prompt, "first");

    let _ = press(&mut workbench, KeyCode::Enter, KeyModifiers::NONE);
    let _ = workbench.tick(Instant::now() + Duration::from_secs(5));
    let transcript = &workbench.state().workspace.transcript;
    assert_eq!(transcript.len(), 2);
    assert_eq!(workbench.state().workspace.conversation, 2);
}

#[test]
fn ctrl_q_quits() {
    let mut workbench = workbench(1200);
    let result = press(&mut workbench, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(result.is_quit());
    assert!(workbench.should_quit());
}

#[test]
fn release_events_are_ignored() {
    let mut workbench = workbench(1200);
    let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    event.kind = crossterm::event::KeyEventKind::Release;
    assert!(workbench.handle_input(&InputEvent::Key(event)).is_ignored());
    assert!(workbench.state().workspace.prompt.is_empty());
}

#[test]
fn alt_digit_fills_prompt_from_shortcut() {
    let mut workbench = workbench(1200);
    let _ = press(&mut workbench, KeyCode::Char('1'), KeyModifiers::ALT);
    assert_eq!(workbench.state().workspace.prompt, "Clone a Screenshot");
}

#[test]
fn paste_into_prompt_flattens_newlines() {
    let mut workbench = workbench(1200);
    let result = workbench.handle_input(&InputEvent::Paste("make\nit pop".to_string()));
    assert!(result.is_consumed());
    assert_eq!(workbench.state().workspace.prompt, "make it pop");
}

#[test]
fn terminal_resize_reclassifies_viewport_without_touching_sidebar() {
    let mut workbench = workbench(1200);
    let result = workbench.handle_input(&InputEvent::Resize {
        columns: 60,
        rows: 40,
    });
    assert!(result.is_consumed());
    assert!(workbench.tick(Instant::now()));
    assert!(workbench.state().viewport.narrow);
    assert_eq!(workbench.state().layout.sidebar, SidebarState::Expanded);
}

#[test]
fn editor_typing_writes_through_to_file_store() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "go");
    let _ = press(&mut workbench, KeyCode::F(6), KeyModifiers::NONE);
    let _ = press(&mut workbench, KeyCode::F(6), KeyModifiers::NONE);
    assert_eq!(workbench.focus(), FocusTarget::Editor);

    let _ = press(&mut workbench, KeyCode::Char('x'), KeyModifiers::NONE);
    let content = workbench.state().files.content("sidebar.tsx");
    assert!(content.starts_with("xfunction Sidebar"));
    assert_eq!(workbench.editor_text(), content);
    assert_eq!(workbench.state().editor.cursor, CursorPosition::new(1, 2));
}

#[test]
fn editor_paste_with_carriage_return_tracks_cursor() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "go");
    let _ = press(&mut workbench, KeyCode::F(6), KeyModifiers::NONE);
    let _ = press(&mut workbench, KeyCode::F(6), KeyModifiers::NONE);
    assert_eq!(workbench.focus(), FocusTarget::Editor);

    let result = workbench.handle_input(&InputEvent::Paste("ab\rcd".to_string()));
    assert!(result.is_consumed());
    let _ = press(&mut workbench, KeyCode::Char('x'), KeyModifiers::NONE);

    let content = workbench.state().files.content("sidebar.tsx");
    assert!(content.starts_with("ab\ncdxfunction Sidebar"));
    assert_eq!(workbench.state().editor.cursor, CursorPosition::new(2, 4));
}

#[test]
fn explorer_keys_open_next_file() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "go");
    let _ = press(&mut workbench, KeyCode::F(6), KeyModifiers::NONE);
    assert_eq!(workbench.focus(), FocusTarget::Explorer);

    let _ = press(&mut workbench, KeyCode::Char('j'), KeyModifiers::NONE);
    let _ = press(&mut workbench, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(workbench.state().files.active_file(), "mobile-sidebar-trigger.tsx");
    assert_eq!(workbench.editor_text(), seed::MOBILE_SIDEBAR_TRIGGER_TSX);
}

#[test]
fn landing_render_shows_headline_and_sidebar() {
    let mut workbench = workbench(1200);
    let text = render_text(&mut workbench, 120, 30);
    assert!(text.contains(HEADLINE));
    assert!(text.contains("New Chat"));
    assert!(workbench.cursor_position().is_some());
}

#[test]
fn building_render_shows_header_explorer_and_editor() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "Clone a Screenshot");
    let text = render_text(&mut workbench, 160, 40);

    assert!(text.contains("Building: Clone a Screenshot"));
    assert!(text.contains("Files"));
    assert!(text.contains("▼ components"));
    assert!(text.contains("Ln 1, Col 1"));
    assert!(text.contains("function Sidebar() {"));
}

#[test]
fn fullscreen_render_covers_sidebar_and_keeps_chat() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "Clone a Screenshot");
    assert!(render_text(&mut workbench, 160, 40).contains("New Chat"));

    let _ = press(&mut workbench, KeyCode::F(11), KeyModifiers::NONE);
    let text = render_text(&mut workbench, 160, 40);
    assert!(text.contains("[fullscreen]"));
    assert!(!text.contains("New Chat"));
    assert!(text.lines().next().unwrap().starts_with(" Building: Clone a Screenshot"));
    assert!(text.contains("Ask a follow-up"));
    assert!(text.contains("▼ components"));

    // The hidden sidebar no longer takes clicks.
    assert!(workbench.sidebar_view.hit_test(27, 0).is_none());
}

#[test]
fn clicking_explorer_row_opens_file() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "go");
    let _ = render_text(&mut workbench, 160, 40);

    let area = workbench.explorer.area().unwrap();
    let result = click(&mut workbench, area.x + 1, area.y + 3);
    assert!(result.is_consumed());
    assert_eq!(workbench.focus(), FocusTarget::Explorer);
    assert_eq!(workbench.state().files.active_file(), "page.tsx");
    assert_eq!(workbench.editor_text(), "");
}

#[test]
fn clicking_sidebar_toggle_collapses_it() {
    let mut workbench = workbench(1200);
    let _ = render_text(&mut workbench, 120, 30);
    assert!(click(&mut workbench, 27, 0).is_consumed());
    assert_eq!(workbench.state().layout.sidebar, SidebarState::Collapsed);
}

#[test]
fn wheel_over_explorer_moves_selection() {
    let mut workbench = workbench(1200);
    start_building(&mut workbench, "go");
    let _ = render_text(&mut workbench, 160, 40);
    let area = workbench.explorer.area().unwrap();
    let before = workbench.state().files.selected_row();

    let scroll = |column, row| {
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    };
    assert!(workbench.handle_input(&scroll(area.x, area.y)).is_consumed());
    assert_eq!(workbench.state().files.selected_row(), before + 1);

    assert!(workbench
        .handle_input(&scroll(area.x + area.width, area.y))
        .is_ignored());
    assert_eq!(workbench.state().files.selected_row(), before + 1);
}
