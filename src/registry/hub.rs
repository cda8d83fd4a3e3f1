// ABOUTME: Docker Hub tag listing over the v2 repositories API.
// ABOUTME: Follows `next` links page by page with a fixed delay in between.

use super::error::RegistryError;
use super::source::TagSource;
use super::types::{FetchOptions, Repository, TagPage, TagRecord};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("docker-check-tags/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Tag source backed by the Docker Hub HTTP API.
#[derive(Debug, Clone)]
pub struct HubClient {
    client: Client,
    options: FetchOptions,
}

impl HubClient {
    pub fn new(options: FetchOptions) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, options }
    }

    async fn fetch_page(&self, url: &str) -> Result<TagPage, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| RegistryError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl TagSource for HubClient {
    async fn list_tags(
        &self,
        repository: &Repository,
        name_filter: &str,
    ) -> Result<Vec<TagRecord>, RegistryError> {
        let mut tags = Vec::new();
        let mut next_url = Some(self.options.first_page_url(repository, name_filter));
        let mut page_number = 0u32;

        while let Some(url) = next_url.take() {
            if page_number > 0 && !self.options.page_delay.is_zero() {
                tokio::time::sleep(self.options.page_delay).await;
            }
            page_number += 1;

            let page = self.fetch_page(&url).await?;
            tracing::debug!(
                repository = %repository,
                page = page_number,
                received = page.results.len(),
                total = ?page.count,
                "fetched tag page"
            );

            tags.extend(page.results);
            next_url = page.next.filter(|next| !next.is_empty());
        }

        Ok(tags)
    }
}
