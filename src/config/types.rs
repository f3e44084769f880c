use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

/// Where the key-value store lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file. Falls back to [`StoreConfig::default_path`] when unset.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// `~/.local/share/tally/store.json` on Linux, or the platform
    /// equivalent via `dirs::data_dir()`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("tally").join("store.json")
    }

    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(Self::default_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Quantity a fresh edit buffer starts at.
    pub default_quantity: i64,
    /// Reject scanned codes whose EAN check digit does not match.
    pub validate_checksum: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_quantity: 1,
            validate_checksum: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `info` or
    /// `warn,tally=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
