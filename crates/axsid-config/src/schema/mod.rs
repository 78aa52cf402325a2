//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use axsid_protocols::{DEFAULT_MAX_NODES, DEFAULT_QUERY_MAX};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Snapshot and query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Page size used when a snapshot request sets none.
    #[serde(default = "default_max_nodes")]
    pub default_max_nodes: usize,

    /// Result bound used when a query request sets none.
    #[serde(default = "default_query_max")]
    pub default_query_max: usize,

    /// Traversal bound as a multiple of the page size.
    #[serde(default = "default_safety_multiple")]
    pub safety_multiple: usize,

    #[serde(default = "default_snippet_max_chars")]
    pub snippet_max_chars: usize,

    /// Fields returned when a snapshot request selects none. Empty means all.
    #[serde(default)]
    pub default_fields: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_nodes: default_max_nodes(),
            default_query_max: default_query_max(),
            safety_multiple: default_safety_multiple(),
            snippet_max_chars: default_snippet_max_chars(),
            default_fields: Vec::new(),
        }
    }
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

fn default_query_max() -> usize {
    DEFAULT_QUERY_MAX
}

fn default_safety_multiple() -> usize {
    10
}

fn default_snippet_max_chars() -> usize {
    50
}

/// On-disk encoding of a captured tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeFormat {
    /// Nested `AccessibilityNode` JSON.
    #[default]
    Tree,
    /// Flat `Accessibility.getFullAXTree` result.
    Cdp,
}

impl TreeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Cdp => "cdp",
        }
    }
}

/// Tree provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Frame id used when the tree does not carry one.
    #[serde(default = "default_frame_id")]
    pub frame_id: String,

    #[serde(default)]
    pub format: TreeFormat,

    /// Tree file read on every capture. `~` is expanded.
    #[serde(default)]
    pub tree_path: Option<String>,

    /// Bounds keyed by backend DOM node id, for `cdp` trees. `~` is expanded.
    #[serde(default)]
    pub bounds_path: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            frame_id: default_frame_id(),
            format: TreeFormat::default(),
            tree_path: None,
            bounds_path: None,
        }
    }
}

fn default_frame_id() -> String {
    "main".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit console logs as JSON lines.
    #[serde(default)]
    pub json: bool,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
