//! Configuration for graphwalk
//!
//! Configuration is read from an explicit `--config` path, or from
//! `config.toml` in the graphwalk config directory (`$GRAPHWALK_CONFIG_DIR`,
//! falling back to the platform config dir). Missing implicit files yield
//! defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{InputConfig, SearchConfig, WalkConfig, CONFIG_FORMAT_VERSION};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl WalkConfig {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GraphError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => GraphError::Io(e),
        })?;
        let config: WalkConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer graphwalk"
            );
        }

        Ok(config)
    }

    /// Resolve configuration: explicit path, then default location, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SearchMode;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WalkConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.input.skip_blank_lines);
        assert!(config.input.comment_prefix.is_none());
        assert_eq!(config.search.mode, SearchMode::Bfs);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = WalkConfig {
            input: InputConfig {
                skip_blank_lines: false,
                comment_prefix: Some("#".to_string()),
            },
            search: SearchConfig {
                mode: SearchMode::Dfs,
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = WalkConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nmode = \"dfs\"\n").unwrap();

        let loaded = WalkConfig::load(&path).unwrap();
        assert_eq!(loaded.search.mode, SearchMode::Dfs);
        assert!(loaded.input.skip_blank_lines);
        assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
    }

    #[test]
    fn test_invalid_mode_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nmode = \"astar\"\n").unwrap();

        let err = WalkConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = WalkConfig::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, GraphError::FileNotFound { .. }));
    }
}
