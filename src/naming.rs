//! Naming rules for the `NN-name` convention.
//!
//! Files and directories carry an optional ordering prefix of two or more
//! digits followed by a dash. The prefix controls sort order only: it is
//! removed from display titles and from published URLs.
//!
//! ## Display Titles
//!
//! The remaining slug is split into words and each word is capitalized:
//! - `03-http-client` → "Http Client" (group title)
//! - `01-installation.md` → "Installation" (page title)
//! - `02-getting_startedQuickly.md` → "Getting Started Quickly"
//!
//! ## Ignore Rule
//!
//! Pages named with a leading `_`, `.` or `index` never reach the navigation.
//! This keeps drafts, dotfiles and index pages out of the sidebar and rewrites.
//! The rewrite walk still descends into directories with such names.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static ORDERING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2,})-").expect("ordering prefix pattern is valid"));

const MARKDOWN_EXTENSION: &str = ".md";

/// Remove a leading `NN-` ordering prefix. Names without one are returned as is.
pub fn strip_ordering_prefix(name: &str) -> &str {
    ORDERING_PREFIX
        .find(name)
        .map_or(name, |m| &name[m.end()..])
}

/// Whether the name starts with a `NN-` ordering prefix.
pub fn has_ordering_prefix(name: &str) -> bool {
    ORDERING_PREFIX.is_match(name)
}

/// Numeric value of the ordering prefix, if any.
///
/// - `"020-guide"` → `Some(20)`
/// - `"1-guide"` → `None` (single digit is not a prefix)
/// - `"guide"` → `None`
pub fn ordering_number(name: &str) -> Option<u64> {
    ORDERING_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Whether the name has exactly the `.md` extension.
///
/// A bare dotfile such as `.md` has no extension and is not markdown.
pub fn is_markdown(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == "md")
}

/// Whether an entry is excluded from navigation entirely.
pub fn should_ignore(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.') || name.starts_with("index")
}

/// Remove a trailing `.md`.
pub fn strip_extension(name: &str) -> &str {
    name.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(name)
}

/// Strip the ordering prefix from every `/`-separated segment of a path.
///
/// `"02-getting-started/01-installation.md"` → `"getting-started/installation.md"`
pub fn strip_path_prefixes(rel_path: &str) -> String {
    rel_path
        .split('/')
        .map(strip_ordering_prefix)
        .collect::<Vec<_>>()
        .join("/")
}

/// Human-readable title for a file or directory name.
///
/// Strips the ordering prefix and the `.md` extension, then splits the slug on
/// any non-alphanumeric character, on lower→upper case boundaries, and between
/// letter and digit runs (`http2` → `Http 2`). Each word gets its first letter
/// uppercased; the rest of the word is kept.
pub fn to_title(name: &str) -> String {
    let slug = strip_extension(strip_ordering_prefix(name));

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in slug.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        let boundary = prev.is_some_and(|p| {
            (c.is_uppercase() && p.is_lowercase()) || (c.is_numeric() != p.is_numeric())
        });
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
