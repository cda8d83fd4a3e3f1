// ABOUTME: Check command: walks compose services and reports newer tags.
// ABOUTME: Services are checked one at a time, in document order.

use crate::check::Checker;
use crate::compose::ServiceEntry;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::output::{Columns, Output};
use crate::registry::{TagRecord, TagSource};
use crate::types::{ImageRef, ServiceName};

/// What happened when a service was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    /// No `image` and no `BASE` build argument.
    MissingImage,
    /// The image reference did not parse.
    InvalidImage(String),
    /// The image lives on a registry other than Docker Hub.
    UnsupportedRegistry(String),
    /// Tags newer than the current one, oldest first.
    Checked(Vec<TagRecord>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOutcome {
    pub service: ServiceName,
    pub image: Option<String>,
    pub status: ServiceStatus,
}

impl ServiceOutcome {
    pub fn has_newer(&self) -> bool {
        matches!(&self.status, ServiceStatus::Checked(newer) if !newer.is_empty())
    }
}

/// Parse an image reference and make sure Docker Hub can answer for it.
pub fn resolve_image(reference: &str) -> Result<ImageRef> {
    let image = ImageRef::parse(reference).map_err(|source| Error::InvalidImage {
        reference: reference.to_string(),
        source,
    })?;

    if !image.is_docker_hub() {
        let registry = image.registry().unwrap_or_default().to_string();
        return Err(Error::UnsupportedRegistry(registry));
    }

    Ok(image)
}

/// Check every service and print each result as soon as it is known.
///
/// Per-service problems are reported inline and recorded in `diagnostics`.
/// A registry failure aborts the whole run.
pub async fn check_services<S: TagSource>(
    checker: &Checker<S>,
    services: &[ServiceEntry],
    output: &Output,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ServiceOutcome>> {
    let mut outcomes = Vec::with_capacity(services.len());

    for entry in services {
        let status = check_service(checker, entry, diagnostics).await?;
        let outcome = ServiceOutcome {
            service: entry.name.clone(),
            image: entry.image.clone(),
            status,
        };
        output.service(&outcome)?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

async fn check_service<S: TagSource>(
    checker: &Checker<S>,
    entry: &ServiceEntry,
    diagnostics: &mut Diagnostics,
) -> Result<ServiceStatus> {
    let Some(reference) = entry.image.as_deref() else {
        diagnostics.warn(Warning::missing_image(&entry.name));
        return Ok(ServiceStatus::MissingImage);
    };

    let image = match resolve_image(reference) {
        Ok(image) => image,
        Err(Error::InvalidImage { source, .. }) => {
            diagnostics.warn(Warning::invalid_image(&entry.name, source.to_string()));
            return Ok(ServiceStatus::InvalidImage(source.to_string()));
        }
        Err(Error::UnsupportedRegistry(registry)) => {
            diagnostics.warn(Warning::unsupported_registry(&entry.name, &registry));
            return Ok(ServiceStatus::UnsupportedRegistry(registry));
        }
        Err(e) => return Err(e),
    };

    let newer = checker.find_newer(&image).await?;
    Ok(ServiceStatus::Checked(newer))
}

/// Check a single image reference. Any problem is fatal.
pub async fn check_image<S: TagSource>(
    checker: &Checker<S>,
    reference: &str,
    output: &Output,
) -> Result<Vec<TagRecord>> {
    let image = resolve_image(reference)?;
    let newer = checker.find_newer(&image).await?;
    output.image(reference, &newer)?;
    Ok(newer)
}

/// Column widths for a set of services.
pub fn columns_for(services: &[ServiceEntry]) -> Columns {
    Columns::fit(
        services
            .iter()
            .map(|s| (s.name.as_str(), s.image.as_deref())),
    )
}
