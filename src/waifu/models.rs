//! waifu.im data models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tag used when the browser doesn't ask for any
pub const DEFAULT_TAG: &str = "waifu";

/// Minimum image height requested from the search API
pub const MIN_HEIGHT_FILTER: &str = ">=2000";

/// Avatar image search request from the browser
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearchRequest {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, rename = "isNSFW")]
    pub is_nsfw: bool,
}

impl ImageSearchRequest {
    /// Requested tags, defaulting to `waifu` when none were given
    pub fn effective_tags(&self) -> Vec<String> {
        let tags: Vec<String> = self
            .tags
            .iter()
            .flatten()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        if tags.is_empty() {
            vec![DEFAULT_TAG.to_string()]
        } else {
            tags
        }
    }
}

/// `GET /search` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub images: Vec<WaifuImage>,
}

/// One image entry from the search API
#[derive(Debug, Clone, Deserialize)]
pub struct WaifuImage {
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
}

/// Image handed back to the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageResponse {
    pub url: String,
    pub source: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub tags: Vec<serde_json::Value>,
}

impl From<WaifuImage> for ImageResponse {
    fn from(image: WaifuImage) -> Self {
        Self {
            url: image.url,
            source: image.source,
            tags: image.tags,
        }
    }
}
