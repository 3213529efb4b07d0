//! Virtual project tree.
//!
//! The tree is declared as plain `FileNode` records (usually deserialized from
//! the seed manifest) and validated once into an arena. After construction the
//! shape never changes; expansion and selection live in the file store.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// Declarative tree entry. `children` is only meaningful for folders and
/// `extension` only for files; both rules are checked by `FileTree::from_nodes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
}

impl FileNode {
    pub fn file(id: &str, name: &str, extension: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: NodeKind::File,
            extension: Some(extension.to_string()),
            children: None,
        }
    }

    pub fn folder(id: &str, name: &str, children: Vec<FileNode>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: NodeKind::Folder,
            extension: None,
            children: Some(children),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    EmptyId,
    DuplicateId(String),
    FolderWithoutChildren(String),
    FileWithChildren(String),
    ExtensionOnFolder(String),
    Parse(String),
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::EmptyId => write!(f, "node id must not be empty"),
            FileTreeError::DuplicateId(id) => write!(f, "duplicate node id: {id}"),
            FileTreeError::FolderWithoutChildren(id) => {
                write!(f, "folder {id} has no children list")
            }
            FileTreeError::FileWithChildren(id) => write!(f, "file {id} carries children"),
            FileTreeError::ExtensionOnFolder(id) => write!(f, "folder {id} carries an extension"),
            FileTreeError::Parse(msg) => write!(f, "invalid tree manifest: {msg}"),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub extension: Option<String>,
    pub parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Expansion lookup used while flattening. Absent entries are collapsed.
pub type ExpansionState = FxHashMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub node: NodeId,
    pub id: String,
    pub depth: u16,
    pub name: String,
    pub is_folder: bool,
    pub is_expanded: bool,
}

#[derive(Debug, Clone)]
pub struct FileTree {
    arena: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    by_id: FxHashMap<String, NodeId>,
}

impl FileTree {
    pub fn from_nodes(nodes: Vec<FileNode>) -> Result<Self, FileTreeError> {
        let mut tree = Self {
            arena: SlotMap::with_key(),
            roots: Vec::with_capacity(nodes.len()),
            by_id: FxHashMap::default(),
        };

        for node in nodes {
            let id = tree.insert(node, None)?;
            tree.roots.push(id);
        }

        Ok(tree)
    }

    pub fn from_json(manifest: &str) -> Result<Self, FileTreeError> {
        let nodes: Vec<FileNode> =
            serde_json::from_str(manifest).map_err(|err| FileTreeError::Parse(err.to_string()))?;
        Self::from_nodes(nodes)
    }

    fn insert(&mut self, node: FileNode, parent: Option<NodeId>) -> Result<NodeId, FileTreeError> {
        if node.id.is_empty() {
            return Err(FileTreeError::EmptyId);
        }
        if self.by_id.contains_key(&node.id) {
            return Err(FileTreeError::DuplicateId(node.id));
        }

        let children = match (node.kind, node.children) {
            (NodeKind::Folder, None) => return Err(FileTreeError::FolderWithoutChildren(node.id)),
            (NodeKind::File, Some(_)) => return Err(FileTreeError::FileWithChildren(node.id)),
            (NodeKind::Folder, Some(children)) => children,
            (NodeKind::File, None) => Vec::new(),
        };
        if node.kind == NodeKind::Folder && node.extension.is_some() {
            return Err(FileTreeError::ExtensionOnFolder(node.id));
        }

        let id = self.arena.insert(Node {
            id: node.id.clone(),
            name: node.name,
            kind: node.kind,
            extension: node.extension,
            parent,
            children: Vec::with_capacity(children.len()),
        });
        self.by_id.insert(node.id, id);

        for child in children {
            let child_id = self.insert(child, Some(id))?;
            if let Some(entry) = self.arena.get_mut(id) {
                entry.children.push(child_id);
            }
        }

        Ok(id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn lookup(&self, id: &str) -> Option<&Node> {
        self.by_id.get(id).and_then(|&node| self.arena.get(node))
    }

    pub fn kind_of(&self, id: &str) -> Option<NodeKind> {
        self.lookup(id).map(|n| n.kind)
    }

    /// Every file node in display order, regardless of expansion.
    pub fn files(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            if node.is_folder() {
                stack.extend(node.children.iter().rev().copied());
            } else {
                out.push(node);
            }
        }
        out
    }

    pub fn flatten_for_view(&self, expanded: &ExpansionState) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            let is_expanded = node.is_folder() && expanded.get(&node.id).copied().unwrap_or(false);

            result.push(FileTreeRow {
                node: id,
                id: node.id.clone(),
                depth,
                name: node.name.clone(),
                is_folder: node.is_folder(),
                is_expanded,
            });

            if is_expanded {
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
