//! Key-rotating request relay
//!
//! Tries a generation request against the credential pool in ring order,
//! starting at the shared cursor. The first success moves the cursor just
//! past the credential that answered; a full pass of failures is reported as
//! exhaustion.

pub mod backend;
pub mod error;
pub mod gemini;
pub mod pool;
pub mod types;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn, Span};
use uuid::Uuid;

use crate::routes::metrics::{record_attempt, record_dispatch};

pub use backend::GenerationBackend;
pub use error::{CredentialFailure, RelayError};
pub use gemini::GeminiClient;
pub use pool::{Credential, CredentialPool};
pub use types::{
    validate_history, ConversationTurn, GenerateContentRequest, GenerationOverrides,
    GenerationParams, Part, Role,
};

/// Relay shared by every chat request
pub struct KeyRotatingRelay {
    pool: CredentialPool,
    backend: Arc<dyn GenerationBackend>,
    attempt_timeout: Duration,
}

impl KeyRotatingRelay {
    /// Create a relay over `pool` using `backend` for each attempt
    pub fn new(
        pool: CredentialPool,
        backend: Arc<dyn GenerationBackend>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            pool,
            backend,
            attempt_timeout,
        }
    }

    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }

    /// Number of configured credentials
    pub fn credential_count(&self) -> usize {
        self.pool.len()
    }

    /// Generate a reply for `history`.
    ///
    /// The history is sent verbatim. Never contacts the backend when the
    /// pool is empty.
    #[instrument(
        skip_all,
        fields(
            trace_id = tracing::field::Empty,
            provider = self.backend.name(),
            turns = history.len(),
        )
    )]
    pub async fn dispatch(
        &self,
        history: &[ConversationTurn],
        params: GenerationParams,
    ) -> Result<String, RelayError> {
        let start = Instant::now();
        Span::current().record("trace_id", &Uuid::new_v4().to_string()[..8]);

        if self.pool.is_empty() {
            // Warned once at startup
            debug!("Dispatch requested with an empty credential pool");
            record_dispatch(RelayError::NoCredentialsAvailable.kind(), start.elapsed());
            return Err(RelayError::NoCredentialsAvailable);
        }

        let request = GenerateContentRequest::new(history, params);
        let order = self.pool.attempt_order();

        for (offset, index) in order.iter().copied().enumerate() {
            let Some(credential) = self.pool.get(index) else {
                continue;
            };

            match self.attempt(credential, &request).await {
                Ok(text) => {
                    self.pool.advance_past(offset);
                    record_attempt("success");
                    record_dispatch("success", start.elapsed());
                    info!(
                        key = index + 1,
                        attempts = offset + 1,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Dispatch succeeded"
                    );
                    return Ok(text);
                }
                Err(failure) => {
                    record_attempt(failure.kind());
                    warn!(
                        key = index + 1,
                        failure = failure.kind(),
                        error = %failure,
                        "Credential failed, trying next"
                    );
                }
            }
        }

        let error = RelayError::AllCredentialsExhausted {
            attempts: order.len(),
        };
        record_dispatch(error.kind(), start.elapsed());
        warn!(attempts = order.len(), "All credentials exhausted");
        Err(error)
    }

    /// One bounded call with a single credential
    async fn attempt(
        &self,
        credential: &Credential,
        request: &GenerateContentRequest<'_>,
    ) -> Result<String, CredentialFailure> {
        match tokio::time::timeout(
            self.attempt_timeout,
            self.backend.generate(credential, request),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(CredentialFailure::Timeout(self.attempt_timeout)),
        }
    }
}
