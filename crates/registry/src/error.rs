//! Registry error types.
//!
//! Returned by [`crate::RegistryStore`]; callers let them abort the current request.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving the registry file.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed registry file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid record {id:?}: {reason}")]
    InvalidRecord { id: String, reason: String },
}
