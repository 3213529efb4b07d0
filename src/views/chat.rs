//! Chat pane of the building workspace: tabs, transcript, composer.

use crate::app::theme::UiTheme;
use crate::kernel::state::{ChatMessage, ChatTab, Role};
use crate::models::FileTree;
use crate::views::input::InputBox;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs, Wrap};
use ratatui::Frame;

const COMPOSER_PLACEHOLDER: &str = "Ask a follow-up...";

pub struct ChatPaintCtx<'a> {
    pub tab: ChatTab,
    pub transcript: &'a [ChatMessage],
    pub composer: &'a str,
    pub can_submit: bool,
    pub focused: bool,
    pub tree: &'a FileTree,
    pub active_id: &'a str,
}

pub fn tab_titles() -> [&'static str; 2] {
    ["Chat", "Files"]
}

fn tab_index(tab: ChatTab) -> usize {
    match tab {
        ChatTab::Chat => 0,
        ChatTab::Files => 1,
    }
}

pub fn transcript_lines(transcript: &[ChatMessage], theme: &UiTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(transcript.len() * 3);
    for message in transcript {
        let fg = match message.role {
            Role::User => theme.focus_border,
            Role::Assistant => theme.accent_fg,
        };
        lines.push(Line::from(Span::styled(
            message.role.label(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )));
        for text in message.content.lines() {
            lines.push(Line::raw(text.to_string()));
        }
        lines.push(Line::default());
    }
    lines
}

pub fn render_chat(
    frame: &mut Frame,
    area: Rect,
    ctx: &ChatPaintCtx<'_>,
    theme: &UiTheme,
) -> (Rect, Option<Position>) {
    let [tabs_area, body, composer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(
        Tabs::new(tab_titles())
            .select(tab_index(ctx.tab))
            .style(Style::default().fg(theme.muted_fg))
            .highlight_style(Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD)),
        tabs_area,
    );

    match ctx.tab {
        ChatTab::Chat => {
            let lines = transcript_lines(ctx.transcript, theme);
            // Stick to the bottom once the transcript outgrows the pane.
            let overflow = lines.len().saturating_sub(body.height as usize);
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((overflow as u16, 0)),
                body,
            );
        }
        ChatTab::Files => {
            let lines: Vec<Line> = ctx
                .tree
                .files()
                .into_iter()
                .map(|node| {
                    let style = if node.id == ctx.active_id {
                        Style::default().fg(theme.focus_border).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.header_fg)
                    };
                    Line::from(Span::styled(format!(" {}", node.name), style))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), body);
        }
    }

    let cursor = InputBox {
        title: "Message",
        text: ctx.composer,
        placeholder: COMPOSER_PLACEHOLDER,
        focused: ctx.focused,
        can_submit: ctx.can_submit,
    }
    .render(frame, composer, theme);
    (composer, cursor)
}

#[cfg(test)]
#[path = "../../tests/unit/views/chat.rs"]
mod tests;
