use std::path::Path;
use sourcetree::aggregator::{build_tree, BuildOptions};
use sourcetree::output::{read_tree, validate_path, write_tree, write_tree_file};
use sourcetree::parser::FileEntry;
use sourcetree::aggregator::Node;
use tempfile::NamedTempFile;

fn create_test_tree() -> Node {
    let entries = vec![
        FileEntry::new("repo/src/main.go", 50, 10, 5, "Go"),
        FileEntry::new("repo/src/util.go", 20, 2, 3, "Go"),
        FileEntry::new("repo/README.md", 0, 0, 0, "Markdown"),
    ];
    build_tree(&entries, &BuildOptions::default()).unwrap()
}

#[test]
fn test_write_and_read_tree() {
    let tree = create_test_tree();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Write
    write_tree_file(&tree, path, true).unwrap();

    // Read back
    let loaded = read_tree(path).unwrap();

    assert_eq!(loaded, tree);
    assert_eq!(loaded.find("repo/src").unwrap().code, 70);
}

fn write_to_string(tree: &Node, pretty: bool) -> String {
    let mut buf = Vec::new();
    write_tree(tree, &mut buf, pretty).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_children_written_as_array() {
    let json = write_to_string(&create_test_tree(), false);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let repo = &value["children"][0];
    assert_eq!(repo["name"], "repo");
    assert!(repo["children"].is_array());
    assert_eq!(repo["children"].as_array().unwrap().len(), 2);
    assert!(repo.get("language").is_none());
}

#[test]
fn test_write_tree_to_buffer() {
    let tree = create_test_tree();
    let text = write_to_string(&tree, false);

    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 1);
    assert_eq!(serde_json::from_str::<Node>(&text).unwrap(), tree);
}

#[test]
fn test_pretty_and_compact_agree() {
    let tree = create_test_tree();
    let compact: serde_json::Value = serde_json::from_str(&write_to_string(&tree, false)).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&write_to_string(&tree, true)).unwrap();

    assert_eq!(compact, pretty);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/sourcetree.json");

    write_tree_file(&create_test_tree(), &nested_path, false).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_read_tree_rejects_object_children() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(
        temp_file.path(),
        r#"{"name": "", "code": 1, "comment": 0, "blank": 0, "children": {"a": {"name": "a", "code": 1, "comment": 0, "blank": 0}}}"#,
    )
    .unwrap();

    assert!(read_tree(temp_file.path()).is_err());
}
