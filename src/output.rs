//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Sidebar
//!
//! ```text
//! Sidebar
//! 001 Introduction → /introduction/
//! 002 Getting Started (/getting-started)
//!     001 Installation → /getting-started/installation/
//!     002 First Steps → /getting-started/first-steps/
//! 003 Empty Section (/empty-section, empty)
//! ```
//!
//! ## Rewrites
//!
//! ```text
//! Rewrites
//!     01-introduction.md → introduction/index.md
//!     02-getting-started/01-installation.md → getting-started/installation/index.md
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::sidebar::{count_groups, count_leaves};
use crate::types::{NavigationNode, RewriteMap};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn sidebar_lines(nodes: &[NavigationNode], depth: usize, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        let prefix = format!("{}{}", indent(depth), format_index(i + 1));
        match node {
            NavigationNode::Group(group) if group.items.is_empty() => {
                lines.push(format!("{} {} ({}, empty)", prefix, group.text, group.base));
            }
            NavigationNode::Group(group) => {
                lines.push(format!("{} {} ({})", prefix, group.text, group.base));
                sidebar_lines(&group.items, depth + 1, lines);
            }
            NavigationNode::Leaf(leaf) => {
                lines.push(format!("{} {} → {}", prefix, leaf.text, leaf.link));
            }
        }
    }
}

/// Format the sidebar as an indented tree.
pub fn format_sidebar(nodes: &[NavigationNode]) -> Vec<String> {
    let mut lines = vec!["Sidebar".to_string()];
    sidebar_lines(nodes, 0, &mut lines);
    lines
}

/// Format the rewrite map as `source → destination` lines.
pub fn format_rewrites(rewrites: &RewriteMap) -> Vec<String> {
    let mut lines = vec!["Rewrites".to_string()];
    lines.extend(
        rewrites
            .iter()
            .map(|(source, dest)| format!("{}{} → {}", indent(1), source, dest)),
    );
    lines
}

/// One-line totals for `check` and `build`.
pub fn format_summary(nodes: &[NavigationNode], rewrites: &RewriteMap) -> String {
    format!(
        "{} groups, {} pages in sidebar, {} rewrites",
        count_groups(nodes),
        count_leaves(nodes),
        rewrites.len()
    )
}

pub fn print_sidebar(nodes: &[NavigationNode]) {
    for line in format_sidebar(nodes) {
        println!("{}", line);
    }
}

pub fn print_rewrites(rewrites: &RewriteMap) {
    for line in format_rewrites(rewrites) {
        println!("{}", line);
    }
}
