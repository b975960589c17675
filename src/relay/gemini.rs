//! Gemini `generateContent` backend
//!
//! Sends the key in the `x-goog-api-key` header so it never lands in a URL,
//! and therefore never in a reqwest error message or access log.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use tracing::debug;

use crate::config::Config;

use super::{
    backend::GenerationBackend,
    error::CredentialFailure,
    pool::Credential,
    types::{GenerateContentRequest, GenerateContentResponse},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of an error body kept for diagnostics
const MAX_ERROR_BODY: usize = 512;

/// Gemini REST client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerateContentRequest<'_>,
    ) -> Result<String, CredentialFailure> {
        let api_key = HeaderValue::from_str(credential.expose()).map_err(|_| {
            CredentialFailure::Transport("credential is not a valid header value".to_string())
        })?;

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| CredentialFailure::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "Received response from Gemini");

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(CredentialFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CredentialFailure::MalformedResponse(format!("invalid JSON: {}", e)))?;

        envelope.into_first_text().ok_or_else(|| {
            CredentialFailure::MalformedResponse(
                "missing candidates[0].content.parts[0].text".to_string(),
            )
        })
    }
}
