// ABOUTME: Newer-tag detection for a single image reference.
// ABOUTME: Fetches the tag listing and ranks it against the current tag.

mod error;
mod filters;
mod rank;

pub use error::{CheckError, CheckErrorKind};
pub use filters::{PRERELEASE_MARKERS, TagFilters, is_prerelease, starts_with_word};
pub use rank::{lower_bound, name_filter, rank_newer};

use crate::registry::{Repository, TagRecord, TagSource};
use crate::types::ImageRef;
use error::FetchSnafu;
use snafu::ResultExt;

/// Looks up newer tags for images using a tag source.
pub struct Checker<S> {
    source: S,
    filters: TagFilters,
}

impl<S: TagSource> Checker<S> {
    pub fn new(source: S, filters: TagFilters) -> Self {
        Self { source, filters }
    }

    /// Find tags that are strictly newer than the image's tag, oldest first.
    ///
    /// An image without a tag has nothing to compare against and yields an
    /// empty list without touching the registry.
    pub async fn find_newer(&self, image: &ImageRef) -> Result<Vec<TagRecord>, CheckError> {
        let Some(tag) = image.tag() else {
            tracing::debug!(image = %image, "no tag to compare against");
            return Ok(Vec::new());
        };

        let repository = Repository::from_image(image);
        let filter = name_filter(tag);

        let tags = self
            .source
            .list_tags(&repository, &filter)
            .await
            .context(FetchSnafu {
                repository: repository.to_string(),
            })?;

        let fetched = tags.len();
        let newer = rank_newer(tag, tags, &self.filters);
        tracing::info!(
            image = %image,
            fetched,
            newer = newer.len(),
            "checked image tags"
        );

        Ok(newer)
    }
}
