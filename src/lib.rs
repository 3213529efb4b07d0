//! zstudio - terminal workspace for chat-driven code generation
//!
//! Module layout:
//! - core: semantic commands and terminal input types
//! - kernel: headless state/action/effect store plus service ports and adapters
//! - models: file tree, seed project, text buffer
//! - views: rendering and hit testing (tui)
//! - app: workbench and theme (tui)
//! - tui: terminal guard and view trait (tui)

#[cfg(feature = "tui")]
pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
