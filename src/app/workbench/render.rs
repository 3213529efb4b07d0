use super::Workbench;
use crate::kernel::{FocusTarget, ViewTab, WorkspacePane};
use crate::views::sidebar::{COLLAPSED_WIDTH, EXPANDED_WIDTH};
use crate::views::{
    render_chat, render_landing, ChatPaintCtx, EditorPaintCtx, ExplorerPaintCtx, LandingPaintCtx,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

const CHAT_PANE_PERCENT: u16 = 40;
const EXPLORER_WIDTH: u16 = 26;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_cursor = None;
    workbench.last_input_area = None;
    workbench.explorer = Default::default();
    workbench.editor_view.hide();
    workbench.sidebar_view = Default::default();

    let workspace = &workbench.state().workspace;
    if workspace.is_building() && workspace.fullscreen {
        // Fullscreen covers the whole terminal, sidebar included.
        render_building(workbench, frame, area);
    } else {
        let sidebar_width = if workbench.state().layout.sidebar.is_expanded() {
            EXPANDED_WIDTH
        } else {
            COLLAPSED_WIDTH
        };
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .areas(area);

        render_sidebar(workbench, frame, sidebar_area);
        if workbench.state().workspace.is_building() {
            render_building(workbench, frame, main_area);
        } else {
            render_landing_page(workbench, frame, main_area);
        }
    }

    if let Some(pos) = workbench.last_cursor {
        frame.set_cursor_position(pos);
    }
}

fn render_sidebar(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    if state.layout.sidebar.is_expanded() {
        workbench.sidebar_view.render_expanded(
            frame,
            area,
            &state.sidebar,
            state.layout.user_menu_open,
            &workbench.theme,
        );
    } else {
        workbench
            .sidebar_view
            .render_collapsed(frame, area, &state.sidebar, &workbench.theme);
    }
}

fn render_landing_page(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let ctx = LandingPaintCtx {
        prompt: &state.workspace.prompt,
        can_submit: state.workspace.can_submit(),
        focused: state.ui.focus == FocusTarget::Input,
    };
    let (input_area, cursor) = render_landing(frame, area, &ctx, &workbench.theme);
    workbench.last_input_area = Some(input_area);
    workbench.last_cursor = cursor;
}

fn render_building(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let [header_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    render_header(workbench, frame, header_area);

    let state = workbench.store.state();
    let (show_chat, show_workspace) = if state.single_pane() {
        match state.workspace.narrow_pane {
            WorkspacePane::Chat => (true, false),
            WorkspacePane::Workspace => (false, true),
        }
    } else {
        (true, true)
    };

    let (chat_area, workspace_area) = match (show_chat, show_workspace) {
        (true, true) => {
            let [chat, workspace] = Layout::horizontal([
                Constraint::Percentage(CHAT_PANE_PERCENT),
                Constraint::Min(0),
            ])
            .areas(body);
            (Some(chat), Some(workspace))
        }
        (true, false) => (Some(body), None),
        _ => (None, Some(body)),
    };

    if let Some(chat_area) = chat_area {
        render_chat_pane(workbench, frame, chat_area);
    }
    if let Some(workspace_area) = workspace_area {
        render_workspace_pane(workbench, frame, workspace_area);
    }
}

fn render_header(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let theme = &workbench.theme;
    let mut spans = vec![
        Span::styled(" Building: ", Style::default().fg(theme.muted_fg)),
        Span::styled(
            state.workspace.build_title.clone(),
            Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
        ),
    ];
    if state.workspace.fullscreen {
        spans.push(Span::styled("  [fullscreen]", Style::default().fg(theme.accent_fg)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Esc: back  F11: fullscreen  F6: next pane ",
            Style::default().fg(theme.muted_fg),
        ))
        .alignment(Alignment::Right),
        area,
    );
}

fn render_chat_pane(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(workbench.theme.inactive_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let ctx = ChatPaintCtx {
        tab: state.workspace.chat_tab,
        transcript: &state.workspace.transcript,
        composer: &state.workspace.composer,
        can_submit: state.workspace.can_submit(),
        focused: state.ui.focus == FocusTarget::Input,
        tree: state.files.tree(),
        active_id: state.files.active_file(),
    };
    let (input_area, cursor) = render_chat(frame, inner, &ctx, &workbench.theme);
    workbench.last_input_area = Some(input_area);
    if cursor.is_some() {
        workbench.last_cursor = cursor;
    }
}

fn render_workspace_pane(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let [tabs_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let state = workbench.store.state();
    let theme = &workbench.theme;
    let selected = match state.workspace.view_tab {
        ViewTab::Preview => 0,
        ViewTab::Code => 1,
    };
    frame.render_widget(
        Tabs::new(["Preview", "Code"])
            .select(selected)
            .style(Style::default().fg(theme.muted_fg))
            .highlight_style(Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD)),
        tabs_area,
    );

    match state.workspace.view_tab {
        ViewTab::Preview => {
            let [_, message, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(body);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Preview of \"{}\"", state.workspace.build_title),
                    Style::default().fg(theme.muted_fg),
                ))
                .alignment(Alignment::Center),
                message,
            );
        }
        ViewTab::Code => render_code(workbench, frame, body),
    }
}

fn render_code(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let explorer_width = EXPLORER_WIDTH.min(area.width / 2);
    let [explorer_outer, editor_outer] =
        Layout::horizontal([Constraint::Length(explorer_width), Constraint::Min(0)]).areas(area);

    let state = workbench.store.state();
    let theme = &workbench.theme;

    let explorer_focused = state.ui.focus == FocusTarget::Explorer;
    let explorer_block = Block::bordered()
        .title(" Files ")
        .border_style(Style::default().fg(theme.border(explorer_focused)));
    let explorer_inner = explorer_block.inner(explorer_outer);
    frame.render_widget(explorer_block, explorer_outer);
    let explorer_ctx = ExplorerPaintCtx {
        rows: state.files.rows(),
        selected_row: state.files.selected_row(),
        scroll_offset: state.files.scroll_offset(),
        active_id: state.files.active_file(),
        focused: explorer_focused,
    };
    workbench
        .explorer
        .render(frame, explorer_inner, &explorer_ctx, theme);

    let editor_focused = state.ui.focus == FocusTarget::Editor;
    let editor_block =
        Block::bordered().border_style(Style::default().fg(theme.border(editor_focused)));
    let editor_inner = editor_block.inner(editor_outer);
    frame.render_widget(editor_block, editor_outer);

    let active = state.files.active_file();
    let file_name = state
        .files
        .tree()
        .lookup(active)
        .map(|node| node.name.as_str())
        .unwrap_or(active);
    let editor_ctx = EditorPaintCtx {
        buffer: &workbench.editor,
        file_name,
        language: state.files.language_for(active),
        cursor: state.editor.cursor,
        focused: editor_focused,
    };
    workbench
        .editor_view
        .render(frame, editor_inner, &editor_ctx, theme);

    if editor_focused {
        workbench.last_cursor = workbench.editor_view.cursor_position(&workbench.editor);
    }
}
