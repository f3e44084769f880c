use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by a [`KvStore`](super::KvStore) backend or while
/// encoding/decoding a stored collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode value under '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Write rejected for '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

impl StoreError {
    /// True for failures that happened while reading or decoding.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Decode { .. })
    }
}
