use crate::kernel::state::{ChatMessage, ASSISTANT_PLACEHOLDER, SHORTCUTS};
use crate::kernel::{Action, Effect, FocusTarget, WorkspaceMode};

impl super::Store {
    pub(super) fn reduce_workspace_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputAppend(ch) => {
                self.state.workspace.input_mut().push(ch);
                super::DispatchResult::changed(true)
            }
            Action::InputBackspace => {
                let removed = self.state.workspace.input_mut().pop().is_some();
                super::DispatchResult::changed(removed)
            }
            Action::InputSet(text) => {
                let input = self.state.workspace.input_mut();
                if *input == text {
                    return super::DispatchResult::unchanged();
                }
                *input = text;
                super::DispatchResult::changed(true)
            }
            Action::Submit { text } => self.submit(&text),
            Action::AssistantReplied { conversation } => {
                if conversation != self.state.workspace.conversation {
                    tracing::debug!(
                        conversation,
                        current = self.state.workspace.conversation,
                        "dropping reply for superseded conversation"
                    );
                    return super::DispatchResult::unchanged();
                }
                self.state
                    .workspace
                    .transcript
                    .push(ChatMessage::assistant(ASSISTANT_PLACEHOLDER));
                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    fn submit(&mut self, text: &str) -> super::DispatchResult {
        let text = text.trim();
        if text.is_empty() {
            return super::DispatchResult::unchanged();
        }

        let workspace = &mut self.state.workspace;
        match workspace.mode {
            WorkspaceMode::Landing => {
                workspace.mode = WorkspaceMode::Building;
                workspace.conversation += 1;
                workspace.transcript = vec![ChatMessage::user(text)];
                workspace.build_title = text.to_string();
                workspace.composer.clear();
                workspace.fullscreen = false;
                tracing::info!(
                    conversation = workspace.conversation,
                    title = %workspace.build_title,
                    "entering building mode"
                );
                self.state.ui.focus = FocusTarget::Input;
                self.sync_narrow_pane();
            }
            WorkspaceMode::Building => {
                workspace.transcript.push(ChatMessage::user(text));
                workspace.composer.clear();
                tracing::debug!(
                    conversation = workspace.conversation,
                    messages = workspace.transcript.len(),
                    "follow-up submitted"
                );
            }
        }

        super::DispatchResult {
            effects: vec![Effect::ScheduleAssistantReply {
                conversation: self.state.workspace.conversation,
                delay_ms: self.state.config.reply_delay_ms,
            }],
            state_changed: true,
        }
    }

    pub(super) fn go_back(&mut self) -> bool {
        if !self.state.workspace.is_building() {
            return false;
        }

        let workspace = &mut self.state.workspace;
        workspace.mode = WorkspaceMode::Landing;
        workspace.fullscreen = false;
        workspace.composer.clear();
        if self.state.config.clear_prompt_on_back {
            workspace.prompt.clear();
        }
        tracing::info!(conversation = workspace.conversation, "back to landing");
        self.state.ui.focus = FocusTarget::Input;
        self.sync_narrow_pane();
        true
    }

    /// `n` is 1-based, matching the chip order on the landing page.
    pub(super) fn use_shortcut(&mut self, n: u8) -> bool {
        if self.state.workspace.is_building() {
            return false;
        }
        let Some(label) = usize::from(n)
            .checked_sub(1)
            .and_then(|idx| SHORTCUTS.get(idx))
        else {
            return false;
        };
        if self.state.workspace.prompt == *label {
            return false;
        }
        self.state.workspace.prompt = label.to_string();
        self.state.ui.focus = FocusTarget::Input;
        true
    }
}
