//! Image retrieval: raw bytes from an arbitrary URL, decoded in memory.

use crate::transport::Transport;
use image::DynamicImage;
use spotter_core::{ApiError, Result};
use std::sync::Arc;

/// Fetches an image from an absolute URL and decodes it.
///
/// Failures use the same taxonomy as the rest of the client: transport
/// failure or a non-2xx status is `Other`, an empty body is `BadData`,
/// bytes that are not a known image format are `NoDecode`.
#[derive(Clone)]
pub struct ImageFetcher {
    transport: Arc<dyn Transport>,
}

impl ImageFetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// GETs `url` with no headers and no body and decodes the result.
    pub async fn fetch(&self, url: &str) -> Result<DynamicImage> {
        let response = self
            .transport
            .fetch_raw(url)
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        if !response.is_success() {
            tracing::warn!("Image fetch for {} answered status {}", url, response.status);
            return Err(ApiError::status(response.status));
        }
        if response.body.is_empty() {
            return Err(ApiError::BadData);
        }

        image::load_from_memory(&response.body).map_err(|e| {
            tracing::warn!("Undecodable image bytes from {}: {}", url, e);
            ApiError::NoDecode(e.to_string())
        })
    }
}
