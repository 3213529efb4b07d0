//! Sidebar navigation: expanded panel or collapsed rail.

use crate::app::theme::UiTheme;
use crate::kernel::sidebar::SidebarContent;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub const EXPANDED_WIDTH: u16 = 30;
pub const COLLAPSED_WIDTH: u16 = 4;

pub enum SidebarHit {
    Toggle,
    UserMenu,
}

#[derive(Default)]
pub struct SidebarView {
    toggle_area: Option<Rect>,
    user_area: Option<Rect>,
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
        .unwrap_or(false)
}

fn ellipsize(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

impl SidebarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<SidebarHit> {
        if contains(self.toggle_area, x, y) {
            Some(SidebarHit::Toggle)
        } else if contains(self.user_area, x, y) {
            Some(SidebarHit::UserMenu)
        } else {
            None
        }
    }

    pub fn render_collapsed(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        content: &SidebarContent,
        theme: &UiTheme,
    ) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.inactive_border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [brand, toggle, _, user] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", content.brand_initial),
                Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
            )),
            brand,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(" »", Style::default().fg(theme.focus_border))),
            toggle,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                content.user.initials,
                Style::default().fg(theme.header_fg),
            )),
            user,
        );

        self.toggle_area = Some(toggle);
        self.user_area = None;
    }

    pub fn render_expanded(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        content: &SidebarContent,
        user_menu_open: bool,
        theme: &UiTheme,
    ) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.inactive_border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let menu_height = if user_menu_open {
            content.user_menu.len() as u16
        } else {
            0
        };
        let [header, body, menu, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(menu_height),
            Constraint::Length(2),
        ])
        .areas(inner);

        // header: brand on the left, collapse toggle on the right
        let [brand, toggle] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(3)]).areas(header);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", content.brand_initial),
                Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
            )),
            brand,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("«", Style::default().fg(theme.muted_fg))),
            toggle,
        );
        self.toggle_area = Some(toggle);

        let width = body.width.saturating_sub(3) as usize;
        let section = Style::default().fg(theme.muted_fg).add_modifier(Modifier::BOLD);
        let entry = Style::default().fg(theme.header_fg);
        let link = Style::default().fg(theme.accent_fg);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" + {}", content.new_chat_label),
                Style::default().fg(theme.focus_border).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for item in content.navigation {
            lines.push(Line::from(Span::styled(format!(" {item}"), entry)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" Projects", section)));
        for project in content.projects {
            lines.push(Line::from(Span::styled(
                format!("  {}", ellipsize(project, width)),
                entry,
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", content.view_all_label),
            link,
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" Recent Chats", section)));
        for chat in content.recent_chats {
            lines.push(Line::from(Span::styled(
                format!("  {}", ellipsize(chat, width)),
                entry,
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", content.view_all_label),
            link,
        )));
        frame.render_widget(Paragraph::new(lines), body);

        if user_menu_open {
            let items: Vec<Line> = content
                .user_menu
                .iter()
                .map(|item| {
                    let fg = if item.is_destructive() {
                        theme.danger_fg
                    } else {
                        theme.header_fg
                    };
                    Line::from(Span::styled(format!("   {}", item.label()), Style::default().fg(fg)))
                })
                .collect();
            frame.render_widget(Paragraph::new(items), menu);
        }

        let arrow = if user_menu_open { "▴" } else { "▾" };
        let footer_lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", content.user.initials),
                    Style::default().fg(theme.selected_fg).bg(theme.selected_bg),
                ),
                Span::styled(format!(" {} ", content.user.name), entry),
                Span::styled(arrow, Style::default().fg(theme.muted_fg)),
            ]),
            Line::from(Span::styled(
                format!("     {}", content.user.plan),
                Style::default().fg(theme.premium_fg),
            )),
        ];
        frame.render_widget(Paragraph::new(footer_lines), footer);
        self.user_area = Some(footer);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/sidebar.rs"]
mod tests;
