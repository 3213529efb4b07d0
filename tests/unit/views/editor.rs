use super::*;
use crate::kernel::services::ports::TextBufferEditor;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn draw(view: &mut EditorView, buffer: &TextBuffer, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let ctx = EditorPaintCtx {
                buffer,
                file_name: "sidebar.tsx",
                language: LanguageId::TypeScript,
                cursor: buffer.cursor_position(),
                focused: true,
            };
            let area = frame.area();
            view.render(frame, area, &ctx, &UiTheme::default());
        })
        .unwrap();
    screen_lines(&terminal)
}

#[test]
fn toolbar_shows_file_language_and_position() {
    assert_eq!(toolbar_status(CursorPosition::new(3, 7)), "Ln 3, Col 7");

    let buffer = TextBuffer::from_text("let a = 1;\nlet b = 2;");
    let mut view = EditorView::new();
    let lines = draw(&mut view, &buffer, 50, 5);

    assert!(lines[0].starts_with(" sidebar.tsx  TypeScript"));
    assert!(lines[0].trim_end().ends_with("Ln 1, Col 1"));
    assert!(lines[1].starts_with("  1 let a = 1;"));
    assert!(lines[2].starts_with("  2 let b = 2;"));
}

#[test]
fn caret_lands_after_gutter() {
    let mut buffer = TextBuffer::from_text("abc\ndef");
    buffer.set_cursor(1, 2);
    let mut view = EditorView::new();
    let _ = draw(&mut view, &buffer, 40, 6);

    assert_eq!(view.cursor_position(&buffer), Some(Position::new(6, 2)));
    view.hide();
    assert_eq!(view.cursor_position(&buffer), None);
}

#[test]
fn long_lines_scroll_horizontally_to_caret() {
    let mut buffer = TextBuffer::from_text(&"x".repeat(100));
    buffer.set_cursor(0, 90);
    let mut view = EditorView::new();
    let _ = draw(&mut view, &buffer, 40, 4);

    assert_eq!(view.cursor_position(&buffer), Some(Position::new(39, 1)));
}

#[test]
fn reset_scroll_after_load() {
    let mut buffer = TextBuffer::from_text(&"line\n".repeat(50));
    buffer.set_cursor(40, 0);
    let mut view = EditorView::new();
    let _ = draw(&mut view, &buffer, 40, 6);

    buffer.load("fresh", LanguageId::Css);
    view.reset_scroll();
    let lines = draw(&mut view, &buffer, 40, 6);
    assert!(lines[1].starts_with("  1 fresh"));
}
