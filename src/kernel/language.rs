use serde::{Deserialize, Serialize};

/// Syntax-highlighting language handed to the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageId {
    #[default]
    TypeScript,
    JavaScript,
    Css,
    Json,
    Html,
    Markdown,
}

impl LanguageId {
    /// Unknown or missing extensions fall back to TypeScript.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension.map(str::to_ascii_lowercase).as_deref() {
            Some("ts" | "tsx") => Self::TypeScript,
            Some("js") => Self::JavaScript,
            Some("css") => Self::Css,
            Some("json") => Self::Json,
            Some("html") => Self::Html,
            Some("md") => Self::Markdown,
            _ => Self::TypeScript,
        }
    }

    /// Derives the extension from the last `.` segment of a file name.
    pub fn from_file_name(name: &str) -> Self {
        Self::from_extension(name.rsplit_once('.').map(|(_, ext)| ext))
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Css => "css",
            Self::Json => "json",
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
