// ABOUTME: Tag source trait consumed by the version checker.
// ABOUTME: Lets the ranking core run against a live registry or a fixed list.

use super::error::RegistryError;
use super::types::{Repository, TagRecord};
use async_trait::async_trait;

/// Something that can list every tag of a repository.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// List all tags, following pagination to the end.
    ///
    /// `name_filter` narrows the listing server-side where supported. It is a
    /// hint only; callers must not rely on it.
    async fn list_tags(
        &self,
        repository: &Repository,
        name_filter: &str,
    ) -> Result<Vec<TagRecord>, RegistryError>;
}

/// Fixed in-memory tag list, ignoring the repository and filter.
#[derive(Debug, Clone, Default)]
pub struct StaticTags {
    tags: Vec<TagRecord>,
}

impl StaticTags {
    pub fn new(tags: Vec<TagRecord>) -> Self {
        Self { tags }
    }

    /// Build from bare tag names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(TagRecord::named).collect())
    }
}

#[async_trait]
impl TagSource for StaticTags {
    async fn list_tags(
        &self,
        _repository: &Repository,
        _name_filter: &str,
    ) -> Result<Vec<TagRecord>, RegistryError> {
        Ok(self.tags.clone())
    }
}
