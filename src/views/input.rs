//! Single-line text input box shared by the landing prompt and the chat composer.

use crate::app::theme::UiTheme;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub struct InputBox<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub can_submit: bool,
}

impl InputBox<'_> {
    /// Renders the box and returns where the caret belongs.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) -> Option<Position> {
        let submit_fg = if self.can_submit {
            theme.accent_fg
        } else {
            theme.inactive_border
        };
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), Style::default().fg(theme.header_fg)))
            .title_bottom(Span::styled(" ⏎ Send ", Style::default().fg(submit_fg)))
            .border_style(Style::default().fg(theme.border(self.focused)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        // Keep the tail of long input visible.
        let width = inner.width.saturating_sub(1) as usize;
        let text_width = self.text.width();
        let skip = text_width.saturating_sub(width);
        let paragraph = if self.text.is_empty() {
            Paragraph::new(Span::styled(self.placeholder, Style::default().fg(theme.muted_fg)))
        } else {
            Paragraph::new(self.text).scroll((0, skip as u16))
        };
        frame.render_widget(paragraph, inner);

        self.focused.then(|| {
            Position::new(
                inner.x + (text_width - skip).min(width) as u16,
                inner.y,
            )
        })
    }
}
