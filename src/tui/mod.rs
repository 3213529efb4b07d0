//! Terminal integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the core builds without terminal crates.

pub mod session;
pub mod view;
