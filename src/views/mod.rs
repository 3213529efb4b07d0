//! View layer: pure rendering and hit testing over kernel state.
//!
//! - ExplorerView: file tree
//! - EditorView: toolbar + buffer
//! - SidebarView: navigation panel / collapsed rail
//! - chat / landing: workspace panes

pub mod chat;
pub mod editor;
pub mod explorer;
pub mod input;
pub mod landing;
pub mod sidebar;

pub use chat::{render_chat, ChatPaintCtx};
pub use editor::{EditorPaintCtx, EditorView};
pub use explorer::{ExplorerPaintCtx, ExplorerView};
pub use landing::{render_landing, LandingPaintCtx};
pub use sidebar::{SidebarHit, SidebarView};
