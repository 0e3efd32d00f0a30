//! Project configuration module.
//!
//! Handles loading, validating, and merging `docs-nav.toml`. Stock defaults
//! are the base layer; the project file overrides any subset of them.
//!
//! ## Config File Location
//!
//! Place `docs-nav.toml` in the project directory (next to `src/`):
//!
//! ```text
//! project/
//! ├── docs-nav.toml
//! ├── .vitepress/
//! │   └── generated/           # output_dir: sidebar.json, rewrites.json
//! └── src/                     # source and site_root
//!     ├── index.md
//!     └── 01-introduction.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "src"                       # Directory walked for navigation
//! site_root = "src"                    # Rewrite destinations are relative to this
//! output_dir = ".vitepress/generated"  # Where `build` writes JSON
//!
//! [sidebar]
//! collapsed = true           # Initial state of every group
//! keep_empty_groups = true   # Emit groups without items
//! link_style = "full"        # "full" or "relative"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::sidebar::{LinkStyle, SidebarOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "docs-nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `docs-nav.toml`.
///
/// Paths are relative to the project directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Directory walked for the sidebar and rewrites.
    pub source: String,
    /// Directory that rewrite destinations are relative to.
    pub site_root: String,
    /// Directory `build` writes `sidebar.json` and `rewrites.json` into.
    pub output_dir: String,
    /// Sidebar shape settings.
    pub sidebar: SidebarConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            source: "src".to_string(),
            site_root: "src".to_string(),
            output_dir: ".vitepress/generated".to_string(),
            sidebar: SidebarConfig::default(),
        }
    }
}

impl NavConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("source", &self.source),
            ("site_root", &self.site_root),
            ("output_dir", &self.output_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn source_dir(&self, project: &Path) -> PathBuf {
        project.join(&self.source)
    }

    pub fn site_root_dir(&self, project: &Path) -> PathBuf {
        project.join(&self.site_root)
    }

    pub fn output_path(&self, project: &Path) -> PathBuf {
        project.join(&self.output_dir)
    }
}

/// Sidebar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    pub collapsed: bool,
    pub keep_empty_groups: bool,
    pub link_style: LinkStyle,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        let options = SidebarOptions::default();
        Self {
            collapsed: options.collapsed,
            keep_empty_groups: options.keep_empty_groups,
            link_style: options.link_style,
        }
    }
}

impl From<&SidebarConfig> for SidebarOptions {
    fn from(config: &SidebarConfig) -> Self {
        SidebarOptions {
            collapsed: config.collapsed,
            keep_empty_groups: config.keep_empty_groups,
            link_style: config.link_style,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `docs-nav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `docs-nav.toml` in the project directory.
///
/// Uses stock defaults when the file does not exist.
pub fn load_config(project: &Path) -> Result<NavConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(project)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `docs-nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-nav Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Paths are relative to this file.
# Unknown keys will cause an error.

# Directory walked for the sidebar and the rewrite map.
source = "src"

# Rewrite destinations are relative to this directory. Keep it equal to the
# site generator's source directory.
site_root = "src"

# Where `docs-nav build` writes sidebar.json and rewrites.json.
output_dir = ".vitepress/generated"

# ---------------------------------------------------------------------------
# Sidebar
# ---------------------------------------------------------------------------
[sidebar]
# Initial collapsed state of every group.
collapsed = true

# Emit groups whose directory has no listed pages.
keep_empty_groups = true

# "full":     links are the whole path, e.g. /getting-started/installation/
# "relative": links are the page name only, e.g. /installation/, for
#             generators that prefix item links with the group base.
link_style = "full"
"##
}
