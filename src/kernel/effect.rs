use crate::kernel::language::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Action::AssistantReplied` after `delay_ms`.
    ScheduleAssistantReply {
        conversation: u64,
        delay_ms: u64,
    },
    OpenInEditor {
        id: String,
        text: String,
        language: LanguageId,
    },
    SaveFile {
        id: String,
    },
}
