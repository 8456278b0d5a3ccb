//! Configuration type definitions

use crate::graph::SearchMode;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level graphwalk configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Edge-list parsing options
    #[serde(default)]
    pub input: InputConfig,

    /// Traversal defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Options controlling how edge-list text is split into records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Ignore lines that contain only whitespace
    #[serde(default = "default_skip_blank_lines")]
    pub skip_blank_lines: bool,

    /// Lines starting with this prefix are ignored (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_prefix: Option<String>,
}

/// Defaults for path and component queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Traversal used when no `--mode` is given
    #[serde(default)]
    pub mode: SearchMode,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_skip_blank_lines() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            skip_blank_lines: default_skip_blank_lines(),
            comment_prefix: None,
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            version: CONFIG_FORMAT_VERSION,
            input: InputConfig::default(),
            search: SearchConfig::default(),
        }
    }
}
