//! Catalog queries over the refresh-aware client.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::error::ApiError;
use super::transport::Transport;
use super::types::Video;
use crate::state::catalog::{self, CatalogEntry};
use crate::util::session_hint::HintStore;
use crate::util::slug::normalize_slug;

/// Result of resolving a user-supplied slug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlugLookup {
    Found(CatalogEntry),
    NotFound,
}

impl<T: Transport, H: HintStore> ApiClient<T, H> {
    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Transport, status or decode failures from `GET /video/`.
    pub async fn list_videos(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        let response = self.send(Endpoint::Videos.request()).await?;
        let videos: Vec<Video> = response.json()?;
        log::debug!("catalog loaded: {} videos", videos.len());
        Ok(videos.into_iter().map(CatalogEntry::from).collect())
    }

    /// Resolve a raw route slug to a catalog entry.
    ///
    /// Input that fails slug validation is `NotFound` without a request.
    ///
    /// # Errors
    ///
    /// Failures from `list_videos`.
    pub async fn find_by_slug(&self, raw: &str) -> Result<SlugLookup, ApiError> {
        let Some(slug) = normalize_slug(raw) else {
            log::debug!("rejected slug {raw:?}");
            return Ok(SlugLookup::NotFound);
        };
        let entries = self.list_videos().await?;
        Ok(catalog::find_by_slug(&entries, &slug)
            .cloned()
            .map_or(SlugLookup::NotFound, SlugLookup::Found))
    }
}
