//! Shared test utilities for the docs-nav test suite.
//!
//! Provides fixture setup, page writers, and sidebar lookups/assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let sidebar = generate_sidebar(tmp.path()).unwrap();
//!
//! let group = find_group(&sidebar, "Getting Started");
//! assert_eq!(find_leaf(&group.items, "Installation").link, "/getting-started/installation/");
//!
//! assert_sidebar_shape(&sidebar, &[
//!     ("Introduction", &[]),
//!     ("Getting Started", &["Installation", "First Steps"]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{NavigationGroup, NavigationLeaf, NavigationNode};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a markdown page at `rel` under `root`, creating parent directories.
pub fn write_page(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, format!("# {rel}\n")).unwrap();
}

// =========================================================================
// Sidebar lookups — panics with a clear message on miss
// =========================================================================

/// Display texts of the given nodes, in order.
pub fn node_texts(nodes: &[NavigationNode]) -> Vec<&str> {
    nodes.iter().map(NavigationNode::text).collect()
}

/// Find a group by text among `nodes`. Panics if not found.
pub fn find_group<'a>(nodes: &'a [NavigationNode], text: &str) -> &'a NavigationGroup {
    nodes
        .iter()
        .filter_map(NavigationNode::as_group)
        .find(|g| g.text == text)
        .unwrap_or_else(|| panic!("group '{text}' not found. Available: {:?}", node_texts(nodes)))
}

/// Find a leaf by text among `nodes`. Panics if not found.
pub fn find_leaf<'a>(nodes: &'a [NavigationNode], text: &str) -> &'a NavigationLeaf {
    nodes
        .iter()
        .filter_map(NavigationNode::as_leaf)
        .find(|l| l.text == text)
        .unwrap_or_else(|| panic!("leaf '{text}' not found. Available: {:?}", node_texts(nodes)))
}

/// Assert the top two levels of the sidebar.
///
/// Each entry is `(text, child_texts)`. Use `&[]` for leaves and empty groups.
pub fn assert_sidebar_shape(nodes: &[NavigationNode], expected: &[(&str, &[&str])]) {
    let expected_texts: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(node_texts(nodes), expected_texts, "sidebar top-level texts mismatch");

    for (node, (text, children)) in nodes.iter().zip(expected) {
        let actual_children = match node {
            NavigationNode::Group(group) => node_texts(&group.items),
            NavigationNode::Leaf(_) => vec![],
        };
        assert_eq!(
            actual_children,
            children.to_vec(),
            "sidebar children of '{text}' mismatch"
        );
    }
}
