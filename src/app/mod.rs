//! Application shell: workbench (input routing, effects, layout) and theme.

pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
