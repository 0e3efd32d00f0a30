//! URL rewrite generation.
//!
//! Maps every markdown source file to a clean published path: ordering
//! prefixes are removed from each segment and `name.md` becomes
//! `name/index.md`.
//!
//! ```text
//! 02-getting-started/01-installation.md  →  getting-started/installation/index.md
//! assets/notes.md                        →  assets/notes/index.md
//! ```
//!
//! Unlike the sidebar, rewrites descend into every directory, numbered or not,
//! so unlisted pages are still published under a clean URL. The ignore rule
//! applies to file names only: `_draft.md` is skipped, while pages inside
//! `_partials/` or `index-notes/` are still rewritten.

use crate::naming;
use crate::scan::{self, ScanError};
use crate::types::RewriteMap;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Rewrites for `root`, with destinations relative to `root`.
pub fn generate_rewrites(root: &Path) -> Result<RewriteMap, ScanError> {
    generate_rewrites_within(root, root)
}

/// Rewrites for `root`, with destinations relative to `site_root`.
///
/// Source keys are always relative to `root` and keep their prefixes. When
/// `root` is not inside `site_root`, destinations fall back to `root`.
pub fn generate_rewrites_within(root: &Path, site_root: &Path) -> Result<RewriteMap, ScanError> {
    scan::ensure_dir(root)?;

    let dest_base = if root.starts_with(site_root) {
        site_root
    } else {
        warn!(
            root = %root.display(),
            site_root = %site_root.display(),
            "navigation root is outside the site root, destinations are relative to the navigation root"
        );
        root
    };

    let mut rewrites = RewriteMap::new();
    // destination → source that claimed it
    let mut claimed: HashMap<String, String> = HashMap::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by(|a, b| {
            let a_name = a.file_name().to_string_lossy();
            let b_name = b.file_name().to_string_lossy();
            scan::sort_key(&a_name).cmp(&scan::sort_key(&b_name))
        });

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !naming::is_markdown(&name) || naming::should_ignore(&name) {
            debug!(path = %entry.path().display(), "skipped file");
            continue;
        }

        let (Some(source), Some(dest_rel)) = (
            scan::relative_slash_path(entry.path(), root),
            scan::relative_slash_path(entry.path(), dest_base),
        ) else {
            continue;
        };

        let destination = format!(
            "{}/index.md",
            naming::strip_extension(&naming::strip_path_prefixes(&dest_rel))
        );

        if let Some(first) = claimed.get(&destination) {
            return Err(ScanError::DuplicateDestination {
                destination,
                first: first.clone(),
                second: source,
            });
        }

        claimed.insert(destination.clone(), source.clone());
        rewrites.insert(source, destination);
    }

    info!(root = %root.display(), rewrites = rewrites.len(), "rewrites generated");
    Ok(rewrites)
}
