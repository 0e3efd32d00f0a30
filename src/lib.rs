//! # docs-nav
//!
//! Generates the navigation a markdown documentation site needs from its
//! directory tree. Your filesystem is the data source: numbered directories
//! become sidebar groups, markdown files become pages, and a numeric prefix
//! on any name controls ordering without leaking into titles or URLs.
//!
//! Two independent outputs, both serialized to JSON for the site generator:
//!
//! ```text
//! 1. Sidebar   src/  →  sidebar.json   (ordered tree of groups and pages)
//! 2. Rewrites  src/  →  rewrites.json  (source path → clean published path)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `NN-name` convention: prefix stripping, ignore rule, display titles |
//! | [`scan`] | Deterministic directory listing and the shared [`scan::ScanError`] |
//! | [`sidebar`] | Recursive walk producing the navigation tree |
//! | [`rewrites`] | Walk of every directory producing the rewrite map |
//! | [`types`] | Serialized navigation types (`NavigationNode`, `RewriteMap`) |
//! | [`config`] | `docs-nav.toml` loading, merging with stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Sidebar and Rewrites Disagree on Directories
//!
//! The sidebar only lists numbered directories, so folders like `assets/` stay
//! out of the navigation. Rewrites descend into every directory so pages that
//! are not listed are still published under a clean URL.
//!
//! ## Collisions Are Errors
//!
//! `01-intro.md` and `02-intro.md` both publish to `intro/index.md`. Instead
//! of letting one silently win, rewrite generation fails and names both files.
//!
//! ## Empty Groups Are Kept
//!
//! A numbered directory with nothing listable still shows up as a group with
//! no items, matching what authors see on disk. `keep_empty_groups = false`
//! drops them.

pub mod config;
pub mod naming;
pub mod output;
pub mod rewrites;
pub mod scan;
pub mod sidebar;
pub mod types;

pub use rewrites::{generate_rewrites, generate_rewrites_within};
pub use sidebar::{generate_sidebar, generate_sidebar_with};

#[cfg(test)]
pub(crate) mod test_helpers;
