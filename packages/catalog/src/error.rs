//! Error types for store lookups.
//!
//! A lookup either finds a record, finds nothing, or fails with one of these.
//! Absence of a record is not an error; see [`crate::Lookup`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be opened or read.
    #[error("failed to read store {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store content is not a JSON array of compatible records.
    #[error("failed to decode store {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Io { path, .. } | StoreError::Decode { path, .. } => path.as_path(),
        }
    }

    /// Short label used for log fields and metric attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "io",
            StoreError::Decode { .. } => "decode",
        }
    }
}
