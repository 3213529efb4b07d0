//! Editor view: toolbar, gutter, and the visible slice of the text buffer.

use crate::app::theme::UiTheme;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::editor::CursorPosition;
use crate::models::TextBuffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const GUTTER_MIN_DIGITS: usize = 3;

pub struct EditorPaintCtx<'a> {
    pub buffer: &'a TextBuffer,
    pub file_name: &'a str,
    pub language: LanguageId,
    pub cursor: CursorPosition,
    pub focused: bool,
}

#[derive(Default)]
pub struct EditorView {
    body: Option<Rect>,
    gutter_width: u16,
    scroll_row: usize,
    scroll_col: usize,
}

pub fn toolbar_status(cursor: CursorPosition) -> String {
    format!("Ln {}, Col {}", cursor.line, cursor.column)
}

fn display_width_before(line: &str, grapheme_col: usize) -> usize {
    line.graphemes(true)
        .take(grapheme_col)
        .map(|g| if g == "\t" { 2 } else { g.width() })
        .sum()
}

fn expand_tabs(line: &str) -> String {
    line.trim_end_matches(&['\n', '\r'][..]).replace('\t', "  ")
}

impl EditorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_area(&self) -> Option<Rect> {
        self.body
    }

    /// Not on screen this frame.
    pub fn hide(&mut self) {
        self.body = None;
    }

    /// Forget the scroll position, e.g. after a different file was loaded.
    pub fn reset_scroll(&mut self) {
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    fn scroll_to_cursor(&mut self, buffer: &TextBuffer, height: usize, width: usize) {
        let (row, col) = buffer.cursor();
        let height = height.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }

        let line = buffer.line(row).unwrap_or_default();
        let x = display_width_before(&line, col);
        let width = width.max(1);
        if x < self.scroll_col {
            self.scroll_col = x;
        } else if x >= self.scroll_col + width {
            self.scroll_col = x + 1 - width;
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &EditorPaintCtx<'_>,
        theme: &UiTheme,
    ) {
        let [toolbar_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let status = toolbar_status(ctx.cursor);
        let left = format!(" {}  {}", ctx.file_name, ctx.language.display_name());
        let pad = (toolbar_area.width as usize)
            .saturating_sub(left.width() + status.width() + 1);
        let title_fg = if ctx.focused {
            theme.focus_border
        } else {
            theme.header_fg
        };
        let toolbar = Line::from(vec![
            Span::styled(left, Style::default().fg(title_fg).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(pad)),
            Span::styled(status, Style::default().fg(theme.muted_fg)),
        ]);
        frame.render_widget(Paragraph::new(toolbar), toolbar_area);

        let digits = ctx.buffer.len_lines().to_string().len().max(GUTTER_MIN_DIGITS);
        self.gutter_width = (digits + 1) as u16;
        self.body = Some(body_area);

        let text_width = body_area.width.saturating_sub(self.gutter_width) as usize;
        self.scroll_to_cursor(ctx.buffer, body_area.height as usize, text_width);

        let [gutter_area, text_area] = Layout::horizontal([
            Constraint::Length(self.gutter_width),
            Constraint::Min(0),
        ])
        .areas(body_area);

        let cursor_row = ctx.buffer.cursor().0;
        let end = (self.scroll_row + body_area.height as usize).min(ctx.buffer.len_lines());
        let mut numbers = Vec::with_capacity(end.saturating_sub(self.scroll_row));
        let mut lines = Vec::with_capacity(numbers.capacity());
        for row in self.scroll_row..end {
            let number_style = if row == cursor_row {
                Style::default().fg(theme.header_fg)
            } else {
                Style::default().fg(theme.inactive_border)
            };
            numbers.push(Line::from(Span::styled(
                format!("{:>digits$} ", row + 1),
                number_style,
            )));
            let text = ctx
                .buffer
                .line(row)
                .map(|l| expand_tabs(&l))
                .unwrap_or_default();
            lines.push(Line::raw(text));
        }

        frame.render_widget(Paragraph::new(numbers), gutter_area);
        frame.render_widget(
            Paragraph::new(lines).scroll((0, self.scroll_col as u16)),
            text_area,
        );
    }

    /// Terminal cell of the caret, if it is on screen.
    pub fn cursor_position(&self, buffer: &TextBuffer) -> Option<Position> {
        let body = self.body?;
        let (row, col) = buffer.cursor();
        if row < self.scroll_row || row >= self.scroll_row + body.height as usize {
            return None;
        }
        let line = buffer.line(row).unwrap_or_default();
        let x = display_width_before(&line, col).checked_sub(self.scroll_col)?;
        let x = body.x as usize + self.gutter_width as usize + x;
        if x >= (body.x + body.width) as usize {
            return None;
        }
        Some(Position::new(
            x as u16,
            body.y + (row - self.scroll_row) as u16,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/editor.rs"]
mod tests;
