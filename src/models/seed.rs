//! Seed data for a fresh workspace session.

use super::file_tree::{FileTree, FileTreeError};

const TREE_MANIFEST: &str = include_str!("../../assets/seed/tree.json");

pub const SIDEBAR_TSX: &str = include_str!("../../assets/seed/sidebar.tsx");
pub const MOBILE_SIDEBAR_TRIGGER_TSX: &str =
    include_str!("../../assets/seed/mobile-sidebar-trigger.tsx");
pub const USE_MOBILE_TSX: &str = include_str!("../../assets/seed/use-mobile.tsx");

pub const DEFAULT_ACTIVE_FILE: &str = "sidebar.tsx";
pub const DEFAULT_EXPANDED: [&str; 2] = ["app", "components"];

pub fn tree() -> Result<FileTree, FileTreeError> {
    FileTree::from_json(TREE_MANIFEST)
}

pub fn contents() -> [(&'static str, &'static str); 3] {
    [
        ("sidebar.tsx", SIDEBAR_TSX),
        ("mobile-sidebar-trigger.tsx", MOBILE_SIDEBAR_TRIGGER_TSX),
        ("use-mobile.tsx", USE_MOBILE_TSX),
    ]
}
