//! Workbench: routes terminal input into the kernel, runs effects, and lays out the views.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{
    DeferredActions, KeybindingService, ViewportSignal, ViewportSubscription,
};
use crate::kernel::services::ports::{EditorEvent, EditorInput, Settings, TextBufferEditor};
use crate::kernel::{Action as KernelAction, AppState, Effect, FileStore, FocusTarget, Store};
use crate::models::{FileTreeError, TextBuffer};
use crate::tui::view::{EventResult, View};
use crate::views::{EditorView, ExplorerView, SidebarView};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use std::time::{Duration, Instant};

mod input;
mod render;

pub struct Workbench {
    store: Store,
    editor: TextBuffer,
    explorer: ExplorerView,
    editor_view: EditorView,
    sidebar_view: SidebarView,
    keybindings: KeybindingService,
    theme: UiTheme,
    viewport: ViewportSignal,
    viewport_sub: ViewportSubscription,
    deferred: DeferredActions,
    last_cursor: Option<Position>,
    last_input_area: Option<Rect>,
    last_explorer_view_height: Option<usize>,
}

impl Workbench {
    pub fn new(settings: &Settings, viewport: ViewportSignal) -> Result<Self, FileTreeError> {
        let files = FileStore::seeded()?;
        let state = AppState::new(viewport.current(), files, settings.workspace.clone());

        let mut editor = TextBuffer::new();
        let active = state.files.active_file();
        editor.load(state.files.content(active), state.files.language_for(active));

        let viewport_sub = viewport.subscribe();
        tracing::info!(
            narrow = state.viewport.narrow,
            width_px = ?state.viewport.width_px,
            "workbench mounted"
        );

        Ok(Self {
            store: Store::new(state),
            editor,
            explorer: ExplorerView::new(),
            editor_view: EditorView::new(),
            sidebar_view: SidebarView::new(),
            keybindings: KeybindingService::with_rules(&settings.keybindings),
            theme: UiTheme::from_settings(&settings.theme),
            viewport,
            viewport_sub,
            deferred: DeferredActions::new(),
            last_cursor: None,
            last_input_area: None,
            last_explorer_view_height: None,
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn editor_text(&self) -> String {
        self.editor.text()
    }

    pub fn viewport(&self) -> &ViewportSignal {
        &self.viewport
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.next_deadline()
    }

    pub fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleAssistantReply {
                conversation,
                delay_ms,
            } => {
                self.deferred.schedule(
                    Instant::now(),
                    Duration::from_millis(delay_ms),
                    KernelAction::AssistantReplied { conversation },
                );
            }
            Effect::OpenInEditor { id, text, language } => {
                tracing::debug!(id = %id, language = language.language_id(), "opening file in editor");
                self.editor.load(&text, language);
                self.editor_view.reset_scroll();
            }
            Effect::SaveFile { id } => {
                tracing::info!(id = %id, "saving file");
            }
        }
    }

    fn apply_editor_input(&mut self, input: EditorInput) -> bool {
        let mut changed = false;
        for event in self.editor.apply(input) {
            let action = match event {
                EditorEvent::Changed(text) => KernelAction::EditorContentChanged { text },
                EditorEvent::CursorMoved(position) => KernelAction::EditorCursorMoved(position),
            };
            changed |= self.dispatch_kernel(action);
        }
        changed
    }

    /// Delivers viewport changes and due deferred actions. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(viewport) = self.viewport_sub.poll_changed() {
            changed |= self.dispatch_kernel(KernelAction::ViewportChanged(viewport));
        }
        for action in self.deferred.take_due(now) {
            changed |= self.dispatch_kernel(action);
        }
        changed
    }

    fn sync_explorer_view_height(&mut self) {
        let Some(height) = self.explorer.view_height() else {
            return;
        };
        if self.last_explorer_view_height == Some(height) {
            return;
        }
        self.last_explorer_view_height = Some(height);
        let _ = self.dispatch_kernel(KernelAction::ExplorerSetViewHeight { height });
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
        self.sync_explorer_view_height();
    }

    fn cursor_position(&self) -> Option<Position> {
        self.last_cursor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
