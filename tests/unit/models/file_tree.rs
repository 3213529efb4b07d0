use super::*;
use crate::models::seed;

fn sample() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "src",
            "src",
            vec![
                FileNode::file("main.ts", "main.ts", "ts"),
                FileNode::folder("lib", "lib", vec![FileNode::file("util.js", "util.js", "js")]),
            ],
        ),
        FileNode::file("README.md", "README.md", "md"),
    ]
}

fn expanded(ids: &[&str]) -> ExpansionState {
    ids.iter().map(|id| (id.to_string(), true)).collect()
}

#[test]
fn builds_arena_with_parent_links() {
    let tree = FileTree::from_nodes(sample()).unwrap();
    assert_eq!(tree.arena.len(), 5);
    assert_eq!(tree.roots().len(), 2);

    let lib = tree.lookup("lib").unwrap();
    assert!(lib.is_folder());
    let src_id = lib.parent.unwrap();
    assert_eq!(tree.node(src_id).unwrap().id, "src");
    assert_eq!(tree.children(src_id).len(), 2);
    assert_eq!(tree.kind_of("util.js"), Some(NodeKind::File));
    assert_eq!(tree.kind_of("missing"), None);
}

#[test]
fn flatten_only_descends_into_expanded_folders() {
    let tree = FileTree::from_nodes(sample()).unwrap();

    let collapsed = tree.flatten_for_view(&ExpansionState::default());
    let ids: Vec<&str> = collapsed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["src", "README.md"]);

    let rows = tree.flatten_for_view(&expanded(&["src", "lib"]));
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["src", "main.ts", "lib", "util.js", "README.md"]);
    assert_eq!(rows[3].depth, 2);
    assert!(rows[0].is_expanded);
    assert!(!rows[1].is_folder);
}

#[test]
fn expanded_child_under_collapsed_parent_stays_hidden() {
    let tree = FileTree::from_nodes(sample()).unwrap();
    let rows = tree.flatten_for_view(&expanded(&["lib"]));
    assert!(rows.iter().all(|r| r.id != "util.js"));
}

#[test]
fn files_lists_every_file_in_display_order() {
    let tree = FileTree::from_nodes(sample()).unwrap();
    let names: Vec<&str> = tree.files().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(names, ["main.ts", "util.js", "README.md"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let nodes = vec![
        FileNode::file("a.ts", "a.ts", "ts"),
        FileNode::folder("dir", "dir", vec![FileNode::file("a.ts", "a.ts", "ts")]),
    ];
    assert_eq!(
        FileTree::from_nodes(nodes).unwrap_err(),
        FileTreeError::DuplicateId("a.ts".to_string())
    );
}

#[test]
fn shape_rules_are_enforced() {
    let mut folder = FileNode::folder("dir", "dir", Vec::new());
    folder.children = None;
    assert_eq!(
        FileTree::from_nodes(vec![folder]).unwrap_err(),
        FileTreeError::FolderWithoutChildren("dir".to_string())
    );

    let mut file = FileNode::file("a.ts", "a.ts", "ts");
    file.children = Some(Vec::new());
    assert_eq!(
        FileTree::from_nodes(vec![file]).unwrap_err(),
        FileTreeError::FileWithChildren("a.ts".to_string())
    );

    let mut folder = FileNode::folder("dir", "dir", Vec::new());
    folder.extension = Some("ts".to_string());
    assert_eq!(
        FileTree::from_nodes(vec![folder]).unwrap_err(),
        FileTreeError::ExtensionOnFolder("dir".to_string())
    );

    assert_eq!(
        FileTree::from_nodes(vec![FileNode::file("", "x", "ts")]).unwrap_err(),
        FileTreeError::EmptyId
    );
}

#[test]
fn malformed_manifest_is_a_parse_error() {
    let err = FileTree::from_json("[{\"id\": 1}]").unwrap_err();
    assert!(matches!(err, FileTreeError::Parse(_)));
}

#[test]
fn seed_manifest_is_valid() {
    let tree = seed::tree().unwrap();
    assert_eq!(tree.arena.len(), 16);
    assert_eq!(tree.files().len(), 12);
    assert_eq!(tree.kind_of("components"), Some(NodeKind::Folder));
    assert_eq!(tree.kind_of("sidebar.tsx"), Some(NodeKind::File));

    let nested = tree.lookup("ui/sidebar.tsx").unwrap();
    assert_eq!(nested.name, "sidebar.tsx");
    let parent = tree.node(nested.parent.unwrap()).unwrap();
    assert_eq!(parent.id, "ui");
}
