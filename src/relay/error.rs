//! Relay error taxonomy

use std::time::Duration;

use thiserror::Error;

/// Why one credential's attempt failed.
///
/// Always recovered inside the relay by moving to the next credential.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl CredentialFailure {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialFailure::Transport(_) => "transport",
            CredentialFailure::Timeout(_) => "timeout",
            CredentialFailure::Status { .. } => "status",
            CredentialFailure::MalformedResponse(_) => "malformed",
        }
    }
}

/// Failures surfaced to callers of `dispatch`
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("no provider credentials are configured")]
    NoCredentialsAvailable,

    #[error("all {attempts} provider credentials failed")]
    AllCredentialsExhausted { attempts: usize },
}

impl RelayError {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::NoCredentialsAvailable => "no_credentials",
            RelayError::AllCredentialsExhausted { .. } => "exhausted",
        }
    }
}
