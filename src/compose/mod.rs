// ABOUTME: Compose document parsing and service enumeration.
// ABOUTME: Resolves each service's image from `image` or the BASE build arg.

mod build;
mod deserialize;

pub use build::{BASE_IMAGE_ARG, BuildArgs, BuildConfig, BuildSpec};

use crate::error::{Error, Result};
use crate::types::ServiceName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The parts of a compose file this tool reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeFile {
    #[serde(deserialize_with = "deserialize::deserialize_services")]
    services: Vec<(ServiceName, ServiceSpec)>,
}

/// One service definition. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceSpec {
    /// `Some(None)` when the key is present but null.
    #[serde(default, deserialize_with = "deserialize::present")]
    pub image: Option<Option<String>>,
    #[serde(default)]
    pub build: Option<BuildSpec>,
}

/// A service and the image reference it runs, if one could be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub name: ServiceName,
    pub image: Option<String>,
}

impl ServiceSpec {
    /// `image` if the key is present, otherwise the `BASE` build argument.
    ///
    /// An explicit `image:` with no value has no image; it does not fall
    /// back to the build argument.
    pub fn image_reference(&self) -> Option<String> {
        match &self.image {
            Some(image) => image.clone(),
            None => self.build.as_ref()?.arg(BASE_IMAGE_ARG),
        }
    }
}

impl ComposeFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::DocumentNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Services in document order with their resolved image references.
    pub fn services(&self) -> Vec<ServiceEntry> {
        self.services
            .iter()
            .map(|(name, spec)| ServiceEntry {
                name: name.clone(),
                image: spec.image_reference(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
