//! Configuration management for the companion relay
//!
//! Configuration is loaded from environment variables. The Gemini credential
//! pool is read once here and never changes while the process runs.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::relay::GenerationParams;

/// Highest numbered `GEMINI_KEY<n>` variable that is scanned
const MAX_NUMBERED_KEYS: usize = 16;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Gemini model used for `generateContent`
    pub gemini_model: String,
    /// Ordered credential pool (may be empty)
    pub gemini_keys: Vec<String>,
    /// Default sampling temperature
    pub temperature: f32,
    /// Default output token cap
    pub max_output_tokens: u32,
    /// Upper bound for a single upstream attempt (in milliseconds)
    pub attempt_timeout_ms: u64,

    /// waifu.im API base URL
    pub waifu_api_url: String,

    /// Directory holding the browser front end, served for unmatched routes
    pub static_dir: Option<PathBuf>,
    /// Key protecting the API docs (open when unset)
    pub docs_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let config = Self {
            host: var("RELAY_HOST", "0.0.0.0"),
            port: var("PORT", "3000").parse().context("Invalid PORT")?,

            gemini_api_url: var(
                "GEMINI_API_URL",
                "https://generativelanguage.googleapis.com",
            )
            .trim_end_matches('/')
            .to_string(),
            gemini_model: var("GEMINI_MODEL", "gemini-pro"),
            gemini_keys: collect_gemini_keys(&lookup),
            temperature: var("GEMINI_TEMPERATURE", "0.8")
                .parse()
                .context("Invalid GEMINI_TEMPERATURE")?,
            max_output_tokens: var("GEMINI_MAX_OUTPUT_TOKENS", "500")
                .parse()
                .context("Invalid GEMINI_MAX_OUTPUT_TOKENS")?,
            attempt_timeout_ms: var("GEMINI_ATTEMPT_TIMEOUT_MS", "20000")
                .parse()
                .context("Invalid GEMINI_ATTEMPT_TIMEOUT_MS")?,

            waifu_api_url: var("WAIFU_API_URL", "https://api.waifu.im")
                .trim_end_matches('/')
                .to_string(),

            static_dir: lookup("STATIC_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            docs_api_key: lookup("DOCS_API_KEY").filter(|key| !key.is_empty()),
        };

        config
            .generation_defaults()
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid GEMINI_TEMPERATURE or GEMINI_MAX_OUTPUT_TOKENS")?;
        if config.attempt_timeout_ms == 0 {
            return Err(anyhow::Error::msg("must be greater than zero"))
                .context("Invalid GEMINI_ATTEMPT_TIMEOUT_MS");
        }

        Ok(config)
    }

    /// Generation parameters applied when a request doesn't override them
    pub fn generation_defaults(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }

    /// Per-attempt timeout for upstream calls
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}

/// Gather the credential pool in ring order.
///
/// `GEMINI_KEY`, then `GEMINI_KEY2`..`GEMINI_KEY16`, then the comma separated
/// `GEMINI_KEYS`. Blank entries are dropped and repeats keep their first slot.
fn collect_gemini_keys<F>(lookup: &F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let numbered = std::iter::once("GEMINI_KEY".to_string())
        .chain((2..=MAX_NUMBERED_KEYS).map(|n| format!("GEMINI_KEY{}", n)))
        .filter_map(|name| lookup(&name));

    let listed = lookup("GEMINI_KEYS")
        .map(|list| list.split(',').map(str::to_string).collect::<Vec<_>>())
        .unwrap_or_default();

    let mut keys: Vec<String> = Vec::new();
    for key in numbered.chain(listed) {
        let key = key.trim();
        if key.is_empty() || keys.iter().any(|existing| existing == key) {
            continue;
        }
        keys.push(key.to_string());
    }
    keys
}
