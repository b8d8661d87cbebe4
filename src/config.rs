// Runtime configuration

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings shared by every screen: where collection blobs live, how many
/// rows a page shows, and how long the mock gateway stalls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub page_size: usize,
    pub gateway_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dealstore");
        Self {
            data_dir,
            page_size: 10,
            gateway_delay_ms: 0,
        }
    }
}

impl Config {
    /// Load from a YAML file. A missing file yields the defaults; an
    /// unreadable one is an error the caller surfaces.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| StoreError::Config(format!("reading {:?}: {}", path, e)))?;
        serde_yaml::from_str(&raw).map_err(|e| StoreError::Config(format!("parsing {:?}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.gateway_delay_ms, 0);
        assert!(config.data_dir.ends_with("dealstore"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("nope.yaml")).unwrap();
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dealstore.yaml");
        fs::write(&path, "page_size: 25\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.gateway_delay_ms, 0);
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dealstore.yaml");
        fs::write(&path, "page_size: [not a number\n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
