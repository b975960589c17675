//! Conversation and Gemini wire types
//!
//! The conversation history is the caller's: it is forwarded verbatim as
//! `contents` and never rewritten by the relay.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single text part of a turn
///
/// Only text parts are relayed; any other field is refused rather than
/// dropped, so what reaches Gemini is exactly what the client sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Part {
    pub text: String,
}

/// One exchange unit (user or model) of the chat history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ConversationTurn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl ConversationTurn {
    /// A turn authored by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role(Role::User, text)
    }

    /// A turn authored by the model
    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role(Role::Model, text)
    }

    fn with_role(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Check that a history can be sent upstream.
///
/// Returns a human readable reason when it can't.
pub fn validate_history(history: &[ConversationTurn]) -> Result<(), String> {
    if history.is_empty() {
        return Err("contents must contain at least one turn".to_string());
    }

    if let Some(position) = history.iter().position(|turn| turn.parts.is_empty()) {
        return Err(format!("contents[{}] has no parts", position));
    }

    Ok(())
}

/// Sampling parameters sent as `generationConfig`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_output_tokens: 500,
        }
    }
}

impl GenerationParams {
    /// Apply per-request overrides, rejecting values Gemini won't accept
    pub fn with_overrides(self, overrides: Option<&GenerationOverrides>) -> Result<Self, String> {
        let Some(overrides) = overrides else {
            return Ok(self);
        };

        let params = Self {
            temperature: overrides.temperature.unwrap_or(self.temperature),
            max_output_tokens: overrides.max_output_tokens.unwrap_or(self.max_output_tokens),
        };

        params.validate()?;
        Ok(params)
    }

    /// Reject values Gemini won't accept
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            ));
        }
        if self.max_output_tokens == 0 {
            return Err("maxOutputTokens must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Optional generation settings supplied by the browser
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Body of a `generateContent` call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: &'a [ConversationTurn],
    pub generation_config: GenerationParams,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(contents: &'a [ConversationTurn], generation_config: GenerationParams) -> Self {
        Self {
            contents,
            generation_config,
        }
    }
}

/// `generateContent` response envelope.
///
/// Every level is optional so a partial body still deserializes; the caller
/// decides what a missing field means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if present
    pub fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
