//! Landing page: headline, prompt, shortcut chips.

use crate::app::theme::UiTheme;
use crate::kernel::state::SHORTCUTS;
use crate::views::input::InputBox;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub const HEADLINE: &str = "How Can I Help You Today?";
const PROMPT_PLACEHOLDER: &str = "Describe what you want to build...";
const PROMPT_MAX_WIDTH: u16 = 72;

pub struct LandingPaintCtx<'a> {
    pub prompt: &'a str,
    pub can_submit: bool,
    pub focused: bool,
}

pub fn shortcut_chips() -> Vec<String> {
    SHORTCUTS
        .iter()
        .enumerate()
        .map(|(i, label)| format!("[Alt+{}] {}", i + 1, label))
        .collect()
}

/// Returns the prompt box area and the caret position.
pub fn render_landing(
    frame: &mut Frame,
    area: Rect,
    ctx: &LandingPaintCtx<'_>,
    theme: &UiTheme,
) -> (Rect, Option<Position>) {
    let [_, headline, _, prompt, _, chips, _, footer] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            HEADLINE,
            Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        headline,
    );

    let [prompt] = Layout::horizontal([Constraint::Max(PROMPT_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(prompt);
    let cursor = InputBox {
        title: "Prompt",
        text: ctx.prompt,
        placeholder: PROMPT_PLACEHOLDER,
        focused: ctx.focused,
        can_submit: ctx.can_submit,
    }
    .render(frame, prompt, theme);

    let mut spans = Vec::new();
    for (i, chip) in shortcut_chips().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(chip, Style::default().fg(theme.accent_fg)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chips,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter: start building  Ctrl+B: sidebar  Ctrl+Q: quit",
            Style::default().fg(theme.muted_fg),
        ))
        .alignment(Alignment::Center),
        footer,
    );

    (prompt, cursor)
}

#[cfg(test)]
#[path = "../../tests/unit/views/landing.rs"]
mod tests;
