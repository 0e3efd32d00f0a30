//! Navigation structures handed to the site generator.
//!
//! These types are serialized to JSON and imported by the site configuration,
//! so field names follow the site generator's sidebar schema (`text`, `base`,
//! `items`, `collapsed`, `link`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directory in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    /// Display title (prefix stripped, words capitalized)
    pub text: String,
    /// URL base: `/` + directory name without ordering prefix
    pub base: String,
    pub items: Vec<NavigationNode>,
    pub collapsed: bool,
}

/// A markdown page in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLeaf {
    pub text: String,
    /// Published link, always with leading and trailing `/`
    pub link: String,
}

/// Sidebar entry: either a group of entries or a single page.
///
/// Serialized without a tag; a group is recognised by its `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavigationNode {
    Group(NavigationGroup),
    Leaf(NavigationLeaf),
}

impl NavigationNode {
    pub fn text(&self) -> &str {
        match self {
            NavigationNode::Group(group) => &group.text,
            NavigationNode::Leaf(leaf) => &leaf.text,
        }
    }

    pub fn as_group(&self) -> Option<&NavigationGroup> {
        match self {
            NavigationNode::Group(group) => Some(group),
            NavigationNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&NavigationLeaf> {
        match self {
            NavigationNode::Leaf(leaf) => Some(leaf),
            NavigationNode::Group(_) => None,
        }
    }
}

/// Source-relative markdown path → published path.
pub type RewriteMap = BTreeMap<String, String>;
