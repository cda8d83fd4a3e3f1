// ABOUTME: Check error types with SNAFU pattern.
// ABOUTME: Wraps registry failures with the repository being checked.

use snafu::Snafu;

use crate::registry::RegistryError;

/// Failure while checking one image for newer tags.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CheckError {
    #[snafu(display("failed to list tags for {repository}: {source}"))]
    Fetch {
        repository: String,
        source: RegistryError,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckErrorKind {
    /// The registry could not be reached or the connection failed.
    Transport,
    /// The registry answered with a non-success status.
    BadStatus,
    /// The registry answered with something that is not a tag listing.
    InvalidResponse,
}

impl CheckError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> CheckErrorKind {
        match self {
            CheckError::Fetch { source, .. } => match source {
                RegistryError::Transport { .. } => CheckErrorKind::Transport,
                RegistryError::Status { .. } => CheckErrorKind::BadStatus,
                RegistryError::Decode { .. } => CheckErrorKind::InvalidResponse,
            },
        }
    }

    /// Repository whose listing failed.
    pub fn repository(&self) -> &str {
        match self {
            CheckError::Fetch { repository, .. } => repository,
        }
    }
}
