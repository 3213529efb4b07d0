use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::EditorInput;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;
use crate::views::SidebarHit;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => handle_key_event(workbench, key_event),
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Mouse(mouse_event) => handle_mouse(workbench, mouse_event),
        InputEvent::Resize { columns, .. } => {
            workbench.viewport.on_terminal_resize(*columns);
            EventResult::Consumed
        }
    }
}

fn keybinding_context(workbench: &Workbench) -> KeybindingContext {
    if !workbench.state().workspace.is_building() {
        return KeybindingContext::Input;
    }
    match workbench.focus() {
        FocusTarget::Input => KeybindingContext::Input,
        FocusTarget::Explorer => KeybindingContext::Explorer,
        FocusTarget::Editor => KeybindingContext::Editor,
    }
}

fn result_of(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn handle_key_event(workbench: &mut Workbench, key_event: &KeyEvent) -> EventResult {
    if key_event.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    let key = Key::from(*key_event);
    let context = keybinding_context(workbench);
    if let Some(command) = workbench.keybindings.resolve(context, &key).cloned() {
        tracing::trace!(%key, command = %command.name(), ?context, "key resolved");
        let quit = command == Command::Quit;
        let changed = workbench.dispatch_kernel(KernelAction::RunCommand(command));
        if quit {
            return EventResult::Quit;
        }
        return result_of(changed);
    }

    // Unbound keys are text input for whichever region has focus.
    let plain = !key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match context {
        KeybindingContext::Input | KeybindingContext::Global => match key_event.code {
            KeyCode::Char(ch) if plain => {
                result_of(workbench.dispatch_kernel(KernelAction::InputAppend(ch)))
            }
            KeyCode::Backspace => result_of(workbench.dispatch_kernel(KernelAction::InputBackspace)),
            _ => EventResult::Ignored,
        },
        KeybindingContext::Editor => {
            let input = match key_event.code {
                KeyCode::Char(ch) if plain => EditorInput::Insert(ch),
                KeyCode::Enter => EditorInput::Newline,
                KeyCode::Tab => EditorInput::Tab,
                KeyCode::Backspace => EditorInput::Backspace,
                KeyCode::Delete => EditorInput::Delete,
                KeyCode::Left => EditorInput::Left,
                KeyCode::Right => EditorInput::Right,
                KeyCode::Up => EditorInput::Up,
                KeyCode::Down => EditorInput::Down,
                KeyCode::Home => EditorInput::Home,
                KeyCode::End => EditorInput::End,
                _ => return EventResult::Ignored,
            };
            result_of(workbench.apply_editor_input(input))
        }
        KeybindingContext::Explorer => EventResult::Ignored,
    }
}

fn handle_paste(workbench: &mut Workbench, text: &str) -> EventResult {
    match keybinding_context(workbench) {
        KeybindingContext::Editor => {
            result_of(workbench.apply_editor_input(EditorInput::Paste(text.to_string())))
        }
        KeybindingContext::Input | KeybindingContext::Global => {
            // Single-line input: newlines become spaces.
            let mut input = workbench.state().workspace.input().to_string();
            input.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
            result_of(workbench.dispatch_kernel(KernelAction::InputSet(input)))
        }
        KeybindingContext::Explorer => EventResult::Ignored,
    }
}

fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> EventResult {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(hit) = workbench.sidebar_view.hit_test(x, y) {
                let command = match hit {
                    SidebarHit::Toggle => Command::ToggleSidebar,
                    SidebarHit::UserMenu => Command::ToggleUserMenu,
                };
                return result_of(workbench.dispatch_kernel(KernelAction::RunCommand(command)));
            }

            if workbench.state().workspace.is_building() {
                let scroll_offset = workbench.state().files.scroll_offset();
                if let Some(row) = workbench.explorer.hit_test_row(x, y, scroll_offset) {
                    return result_of(
                        workbench.dispatch_kernel(KernelAction::ExplorerClickRow { row }),
                    );
                }
                if contains(workbench.editor_view.body_area(), x, y) {
                    return result_of(
                        workbench.dispatch_kernel(KernelAction::RunCommand(Command::FocusEditor)),
                    );
                }
            }

            if let Some(area) = workbench.last_input_area {
                if contains(Some(area), x, y) {
                    return result_of(
                        workbench.dispatch_kernel(KernelAction::RunCommand(Command::FocusInput)),
                    );
                }
            }
            EventResult::Ignored
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
            if contains(workbench.explorer.area(), x, y) =>
        {
            let command = if event.kind == MouseEventKind::ScrollUp {
                Command::ExplorerUp
            } else {
                Command::ExplorerDown
            };
            result_of(workbench.dispatch_kernel(KernelAction::RunCommand(command)))
        }
        _ => EventResult::Ignored,
    }
}

fn contains(area: Option<ratatui::layout::Rect>, x: u16, y: u16) -> bool {
    area.map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
        .unwrap_or(false)
}
