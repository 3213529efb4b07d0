//! Core abstractions shared by the kernel and the terminal host.
//!
//! - Command: semantic commands
//! - Event: terminal input events (tui only)

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::Command;
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key};
