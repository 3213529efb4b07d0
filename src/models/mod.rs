//! Data models: virtual file tree, seed data, editor text buffer.

pub mod file_tree;
pub mod seed;
pub mod text_buffer;

pub use file_tree::{
    ExpansionState, FileNode, FileTree, FileTreeError, FileTreeRow, Node, NodeId, NodeKind,
};
pub use text_buffer::{slice_to_cow, TextBuffer};
