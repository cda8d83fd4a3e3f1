// ABOUTME: Registry data types for tag listings.
// ABOUTME: Tag records, paged responses, repository paths and fetch options.

use crate::types::ImageRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "https://hub.docker.com";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Namespace used for official images on Docker Hub.
const DEFAULT_NAMESPACE: &str = "library";

/// Metadata for one published tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_status: Option<String>,
}

impl TagRecord {
    /// A record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_updated: None,
            digest: None,
            full_size: None,
            tag_status: None,
        }
    }
}

/// One page of a tag listing.
#[derive(Debug, Deserialize)]
pub struct TagPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<TagRecord>,
}

/// Normalized `namespace/name` repository path on Docker Hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository(String);

impl Repository {
    /// Build a repository path, adding the default namespace to bare names.
    pub fn new(name: &str) -> Self {
        if name.contains('/') {
            Self(name.to_string())
        } else {
            Self(format!("{DEFAULT_NAMESPACE}/{name}"))
        }
    }

    pub fn from_image(image: &ImageRef) -> Self {
        Self::new(image.name())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How tag listings are requested.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Base URL of the registry API, without a trailing slash.
    pub base_url: String,
    pub page_size: u32,
    /// Pause between consecutive pages of one listing.
    pub page_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

impl FetchOptions {
    /// URL of the first page of a listing.
    pub fn first_page_url(&self, repository: &Repository, name_filter: &str) -> String {
        format!(
            "{}/v2/repositories/{}/tags/?page=1&page_size={}&name={}",
            self.base_url.trim_end_matches('/'),
            repository,
            self.page_size,
            urlencoding::encode(name_filter)
        )
    }
}
