// ABOUTME: Application-wide error types for docker-check-tags.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::check::CheckError;
use crate::types::ParseImageRefError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("compose file not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("invalid image reference '{reference}': {source}")]
    InvalidImage {
        reference: String,
        #[source]
        source: ParseImageRefError,
    },

    #[error("registry {0} is not supported, only Docker Hub can be queried")]
    UnsupportedRegistry(String),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
