// ABOUTME: Errors raised while listing tags from a registry.
// ABOUTME: Transport failures, unexpected statuses and undecodable pages.

/// Errors from tag listing.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("registry returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid tag listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    /// HTTP status code, if the registry answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
