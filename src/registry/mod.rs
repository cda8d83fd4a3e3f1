// ABOUTME: Registry access for listing published image tags.
// ABOUTME: Exposes the TagSource trait and the Docker Hub implementation.

mod error;
mod hub;
mod source;
mod types;

pub use error::RegistryError;
pub use hub::HubClient;
pub use source::{StaticTags, TagSource};
pub use types::{
    DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE, DEFAULT_REGISTRY_URL, FetchOptions, Repository,
    TagPage, TagRecord,
};
