use super::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw_expanded(view: &mut SidebarView, menu_open: bool) -> String {
    let mut terminal = Terminal::new(TestBackend::new(EXPANDED_WIDTH, 30)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render_expanded(
                frame,
                area,
                &SidebarContent::standard(),
                menu_open,
                &UiTheme::default(),
            );
        })
        .unwrap();
    screen_text(&terminal)
}

#[test]
fn expanded_panel_lists_sections_and_user() {
    let mut view = SidebarView::new();
    let text = draw_expanded(&mut view, false);

    assert!(text.contains("+ New Chat"));
    assert!(text.contains("Community"));
    assert!(text.contains("Projects"));
    assert!(text.contains("Recent Chats"));
    assert!(text.contains("Design a car website"));
    assert!(text.contains("mithuncy"));
    assert!(text.contains("Premium"));
    assert!(!text.contains("Logout"));
}

#[test]
fn open_user_menu_shows_items() {
    let mut view = SidebarView::new();
    let text = draw_expanded(&mut view, true);
    assert!(text.contains("Profile"));
    assert!(text.contains("Settings"));
    assert!(text.contains("Logout"));
    assert!(text.contains('▴'));
}

#[test]
fn expanded_hit_targets() {
    let mut view = SidebarView::new();
    let _ = draw_expanded(&mut view, false);

    assert!(matches!(view.hit_test(27, 0), Some(SidebarHit::Toggle)));
    assert!(matches!(view.hit_test(5, 29), Some(SidebarHit::UserMenu)));
    assert!(view.hit_test(5, 10).is_none());
}

#[test]
fn collapsed_rail_has_toggle_only() {
    let mut view = SidebarView::new();
    let mut terminal = Terminal::new(TestBackend::new(COLLAPSED_WIDTH, 20)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render_collapsed(frame, area, &SidebarContent::standard(), &UiTheme::default());
        })
        .unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains('»'));
    assert!(text.contains("CY"));
    assert!(matches!(view.hit_test(1, 1), Some(SidebarHit::Toggle)));
    assert!(view.hit_test(1, 19).is_none());
}

#[test]
fn ellipsize_truncates_to_width() {
    assert_eq!(ellipsize("Website design", 20), "Website design");
    assert_eq!(ellipsize("Futuristic dashboard", 8), "Futuris…");
}
