//! waifu.im API client
//!
//! HTTP client for the avatar image search used during onboarding.

use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    waifu::models::{ImageResponse, SearchResponse, MIN_HEIGHT_FILTER},
};

/// waifu.im API client
pub struct WaifuClient {
    client: reqwest::Client,
    base_url: String,
}

impl WaifuClient {
    /// Create a new waifu.im client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.waifu_api_url.clone(),
        }
    }

    /// Find one image matching `tags`
    #[instrument(skip(self))]
    pub async fn search(&self, tags: &[String], is_nsfw: bool) -> AppResult<ImageResponse> {
        let url = format!("{}/search", self.base_url);

        let mut query: Vec<(&str, String)> = tags
            .iter()
            .map(|tag| ("included_tags", tag.clone()))
            .collect();
        query.push(("is_nsfw", is_nsfw.to_string()));
        query.push(("height", MIN_HEIGHT_FILTER.to_string()));

        debug!(url = %url, "Searching waifu.im");

        let response = self
            .client
            .get(&url)
            .header("Accept-Version", "v6")
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "waifu.im search failed");

            if status.as_u16() == 404 {
                return Err(AppError::NotFound("No images found".to_string()));
            }

            return Err(AppError::UpstreamError(format!(
                "Image API error {}",
                status
            )));
        }

        let result: SearchResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse waifu.im response");
            AppError::UpstreamError(format!("Failed to parse image API response: {}", e))
        })?;

        result
            .images
            .into_iter()
            .next()
            .map(ImageResponse::from)
            .ok_or_else(|| AppError::NotFound("No images found".to_string()))
    }
}
