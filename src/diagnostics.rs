// ABOUTME: Diagnostics accumulator for non-fatal per-service problems.
// ABOUTME: Collects warnings that skip one service without stopping the run.

use crate::types::ServiceName;

/// Collects non-fatal warnings while checking services.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(service = %warning.service, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A service that could not be checked.
#[derive(Debug, Clone)]
pub struct Warning {
    pub service: ServiceName,
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a missing image warning.
    pub fn missing_image(service: &ServiceName) -> Self {
        Self {
            service: service.clone(),
            kind: WarningKind::MissingImage,
            message: "no image or BASE build argument".to_string(),
        }
    }

    /// Create an invalid image reference warning.
    pub fn invalid_image(service: &ServiceName, message: impl Into<String>) -> Self {
        Self {
            service: service.clone(),
            kind: WarningKind::InvalidImage,
            message: message.into(),
        }
    }

    /// Create an unsupported registry warning.
    pub fn unsupported_registry(service: &ServiceName, registry: &str) -> Self {
        Self {
            service: service.clone(),
            kind: WarningKind::UnsupportedRegistry,
            message: format!("registry {registry} is not supported"),
        }
    }
}

/// Categories of warnings that can occur while checking services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Service has neither an image nor a BASE build argument.
    MissingImage,
    /// Image reference could not be parsed.
    InvalidImage,
    /// Image is hosted outside Docker Hub.
    UnsupportedRegistry,
}
