//! Service adapters: terminal and filesystem specific implementations.

pub mod deferred;
pub mod keybinding;
pub mod settings;
pub mod viewport;

pub use deferred::DeferredActions;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, parse_command, parse_keybinding, SettingsError,
};
pub use viewport::{ViewportSignal, ViewportSubscription};
