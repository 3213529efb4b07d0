//! File explorer view (render + hit testing only).

use crate::app::theme::UiTheme;
use crate::models::FileTreeRow;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct ExplorerPaintCtx<'a> {
    pub rows: &'a [FileTreeRow],
    pub selected_row: usize,
    pub scroll_offset: usize,
    pub active_id: &'a str,
    pub focused: bool,
}

#[derive(Default)]
pub struct ExplorerView {
    area: Option<Rect>,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn view_height(&self) -> Option<usize> {
        let area = self.area?;
        Some(area.height as usize)
    }

    pub fn hit_test_row(&self, column: u16, row: u16, scroll_offset: usize) -> Option<usize> {
        if !self.contains(column, row) {
            return None;
        }
        let area = self.area?;
        Some((row - area.y) as usize + scroll_offset)
    }

    fn render_row(
        row: &FileTreeRow,
        is_selected: bool,
        is_active: bool,
        theme: &UiTheme,
    ) -> Line<'static> {
        let indent = "  ".repeat(row.depth as usize);
        let icon = if row.is_folder {
            if row.is_expanded {
                "▼ "
            } else {
                "▶ "
            }
        } else {
            "  "
        };

        let text = format!("{}{}{}", indent, icon, row.name);

        let mut style = if is_selected {
            Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
        } else if row.is_folder {
            Style::default().fg(theme.accent_fg)
        } else {
            Style::default().fg(theme.header_fg)
        };
        if is_active {
            style = style.add_modifier(Modifier::BOLD);
        }

        Line::from(Span::styled(text, style))
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &ExplorerPaintCtx<'_>,
        theme: &UiTheme,
    ) {
        self.area = Some(area);

        let visible_height = area.height as usize;
        let start = ctx.scroll_offset.min(ctx.rows.len());
        let visible_end = (start + visible_height).min(ctx.rows.len());

        let lines: Vec<Line> = ctx.rows[start..visible_end]
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_selected = ctx.focused && start + i == ctx.selected_row;
                let is_active = !row.is_folder && row.id == ctx.active_id;
                Self::render_row(row, is_selected, is_active, theme)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/explorer.rs"]
mod tests;
