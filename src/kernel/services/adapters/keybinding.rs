//! Key → command lookup, scoped by the focused region.

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Input,
    Explorer,
    Editor,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "input" | "prompt" | "composer" => Some(Self::Input),
            "explorer" | "files" => Some(Self::Explorer),
            "editor" => Some(Self::Editor),
            _ => None,
        }
    }
}

/// A context entry of `None` masks the global binding for that key.
type ContextMap = FxHashMap<Key, Option<Command>>;

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    input: ContextMap,
    explorer: ContextMap,
    editor: ContextMap,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            input: default_input_keybindings(),
            explorer: default_explorer_keybindings(),
            editor: ContextMap::default(),
        }
    }

    /// Defaults overlaid with user rules. Rules that fail to parse are logged and skipped.
    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        service.apply_rules(rules);
        service
    }

    /// Returns the number of rules applied.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(value) => match KeybindingContext::parse(value) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = value, key = %rule.key, "unknown keybinding context");
                        continue;
                    }
                },
            };
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding");
                continue;
            };
            if rule.command.trim().is_empty() {
                self.unbind(context, &key);
                applied += 1;
                continue;
            }
            let Some(command) = parse_command(&rule.command) else {
                tracing::warn!(command = %rule.command, %key, "unknown command in keybinding");
                continue;
            };
            self.bind(context, key, command);
            applied += 1;
        }
        applied
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        let Some(local) = self.context_map(context) else {
            return self.global.get(key);
        };
        match local.get(key) {
            Some(entry) => entry.as_ref(),
            None => self.global.get(key),
        }
    }

    /// Number of keys bound directly in `context`, not counting masks or global fallbacks.
    pub fn bound_count(&self, context: KeybindingContext) -> usize {
        match self.context_map(context) {
            None => self.global.len(),
            Some(map) => map.values().filter(|entry| entry.is_some()).count(),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        match self.context_map_mut(context) {
            None => {
                self.global.insert(key, command);
            }
            Some(map) => {
                map.insert(key, Some(command));
            }
        }
    }

    /// Unbinding in a focused context also hides the global binding there.
    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        let previous = self.resolve(context, key).cloned();
        match self.context_map_mut(context) {
            None => {
                self.global.remove(key);
            }
            Some(map) => {
                map.insert(*key, None);
            }
        }
        previous
    }

    fn context_map(&self, context: KeybindingContext) -> Option<&ContextMap> {
        match context {
            KeybindingContext::Global => None,
            KeybindingContext::Input => Some(&self.input),
            KeybindingContext::Explorer => Some(&self.explorer),
            KeybindingContext::Editor => Some(&self.editor),
        }
    }

    fn context_map_mut(&mut self, context: KeybindingContext) -> Option<&mut ContextMap> {
        match context {
            KeybindingContext::Global => None,
            KeybindingContext::Input => Some(&mut self.input),
            KeybindingContext::Explorer => Some(&mut self.explorer),
            KeybindingContext::Editor => Some(&mut self.editor),
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('b')), Command::ToggleSidebar);
    bindings.insert(Key::ctrl(KeyCode::Char('u')), Command::ToggleUserMenu);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::SaveFile);
    bindings.insert(Key::ctrl(KeyCode::Char('t')), Command::NextChatTab);
    bindings.insert(Key::ctrl(KeyCode::Char('p')), Command::NextViewTab);
    bindings.insert(Key::simple(KeyCode::F(11)), Command::ToggleFullscreen);
    bindings.insert(Key::simple(KeyCode::F(6)), Command::FocusNextPane);
    bindings.insert(Key::simple(KeyCode::Esc), Command::GoBack);

    for n in 1..=4u8 {
        let digit = char::from(b'0' + n);
        bindings.insert(Key::alt(KeyCode::Char(digit)), Command::UseShortcut(n));
    }

    bindings
}

fn default_input_keybindings() -> ContextMap {
    [(Key::simple(KeyCode::Enter), Some(Command::Submit))]
        .into_iter()
        .collect()
}

fn default_explorer_keybindings() -> ContextMap {
    [
        (KeyCode::Up, Command::ExplorerUp),
        (KeyCode::Down, Command::ExplorerDown),
        (KeyCode::Char('k'), Command::ExplorerUp),
        (KeyCode::Char('j'), Command::ExplorerDown),
        (KeyCode::Enter, Command::ExplorerActivate),
        (KeyCode::Char(' '), Command::ExplorerActivate),
    ]
    .into_iter()
    .map(|(code, command)| (Key::simple(code), Some(command)))
    .collect()
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
