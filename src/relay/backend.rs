//! Generation backend abstraction
//!
//! A backend performs exactly one upstream call with one credential. Retry,
//! rotation and timeouts belong to the relay, not to implementations.

use async_trait::async_trait;

use super::{
    error::CredentialFailure,
    pool::Credential,
    types::GenerateContentRequest,
};

/// A provider that turns a conversation into generated text
///
/// # Security
///
/// Implementations MUST NOT log or echo the credential. Identify keys by
/// ring position in logs instead.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Run one generation call.
    ///
    /// A successful HTTP exchange whose body lacks the expected text must be
    /// reported as `CredentialFailure::MalformedResponse`, never as empty text.
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerateContentRequest<'_>,
    ) -> Result<String, CredentialFailure>;
}
