//! Sidebar generation.
//!
//! Mirrors the documentation tree as nested navigation groups. Only numbered
//! directories become groups: unnumbered directories (assets, partials, etc.)
//! are skipped together with everything under them. Markdown files become
//! leaves unless the ignore rule excludes them.
//!
//! ```text
//! 02-getting-started/              → Group "Getting Started", base "/getting-started"
//! └── 01-installation.md           → Leaf "Installation", link "/getting-started/installation/"
//! ```

use crate::naming;
use crate::scan::{self, DirectoryEntry, ScanError};
use crate::types::{NavigationGroup, NavigationLeaf, NavigationNode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// How leaf links are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `/` + full prefix-stripped path from the sidebar root + `/`
    #[default]
    Full,
    /// `/` + prefix-stripped file name + `/`, for generators that prepend the
    /// group `base` to item links
    Relative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarOptions {
    /// Initial collapsed state of every group
    pub collapsed: bool,
    /// Emit groups that end up with no items
    pub keep_empty_groups: bool,
    pub link_style: LinkStyle,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            collapsed: true,
            keep_empty_groups: true,
            link_style: LinkStyle::Full,
        }
    }
}

/// Build the sidebar for `root` with default options.
pub fn generate_sidebar(root: &Path) -> Result<Vec<NavigationNode>, ScanError> {
    generate_sidebar_with(root, &SidebarOptions::default())
}

/// Build the sidebar for `root`.
pub fn generate_sidebar_with(
    root: &Path,
    options: &SidebarOptions,
) -> Result<Vec<NavigationNode>, ScanError> {
    scan::ensure_dir(root)?;
    let nodes = walk_directory(root, root, options)?;
    info!(
        root = %root.display(),
        groups = count_groups(&nodes),
        pages = count_leaves(&nodes),
        "sidebar generated"
    );
    Ok(nodes)
}

fn walk_directory(
    dir: &Path,
    root: &Path,
    options: &SidebarOptions,
) -> Result<Vec<NavigationNode>, ScanError> {
    let mut nodes = Vec::new();

    for entry in scan::collect_entries(dir)? {
        if entry.is_dir {
            if let Some(group) = build_group(&entry, root, options)? {
                nodes.push(NavigationNode::Group(group));
            }
        } else if naming::is_markdown(&entry.name) && !naming::should_ignore(&entry.name) {
            nodes.push(NavigationNode::Leaf(build_leaf(&entry, root, options)));
        } else {
            debug!(path = %entry.path.display(), "skipped file");
        }
    }

    Ok(nodes)
}

fn build_group(
    entry: &DirectoryEntry,
    root: &Path,
    options: &SidebarOptions,
) -> Result<Option<NavigationGroup>, ScanError> {
    if !naming::has_ordering_prefix(&entry.name) || naming::should_ignore(&entry.name) {
        debug!(path = %entry.path.display(), "skipped unnumbered directory");
        return Ok(None);
    }

    let items = walk_directory(&entry.path, root, options)?;
    if items.is_empty() && !options.keep_empty_groups {
        debug!(path = %entry.path.display(), "dropped empty group");
        return Ok(None);
    }

    Ok(Some(NavigationGroup {
        text: naming::to_title(&entry.name),
        base: format!("/{}", naming::strip_ordering_prefix(&entry.name)),
        items,
        collapsed: options.collapsed,
    }))
}

fn build_leaf(entry: &DirectoryEntry, root: &Path, options: &SidebarOptions) -> NavigationLeaf {
    let target = match options.link_style {
        LinkStyle::Full => scan::relative_slash_path(&entry.path, root)
            .map(|rel| naming::strip_path_prefixes(&rel))
            .unwrap_or_else(|| naming::strip_ordering_prefix(&entry.name).to_string()),
        LinkStyle::Relative => naming::strip_ordering_prefix(&entry.name).to_string(),
    };

    NavigationLeaf {
        text: naming::to_title(&entry.name),
        link: format!("/{}/", naming::strip_extension(&target)),
    }
}

/// Number of groups in the tree, at any depth.
pub fn count_groups(nodes: &[NavigationNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            NavigationNode::Group(group) => 1 + count_groups(&group.items),
            NavigationNode::Leaf(_) => 0,
        })
        .sum()
}

/// Number of pages in the tree, at any depth.
pub fn count_leaves(nodes: &[NavigationNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            NavigationNode::Group(group) => count_leaves(&group.items),
            NavigationNode::Leaf(_) => 1,
        })
        .sum()
}
