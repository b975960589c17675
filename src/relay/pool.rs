//! Credential pool with a shared rotation cursor
//!
//! The pool is fixed at construction. The only mutable state is the cursor,
//! which names the ring position the next dispatch starts from.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An opaque provider API key.
///
/// The secret never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for building the outbound request only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Ordered credentials plus the rotation cursor
#[derive(Debug)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
    cursor: AtomicUsize,
}

impl CredentialPool {
    /// Build a pool whose cursor starts at the first credential
    pub fn new<I, S>(credentials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::starting_at(credentials, 0)
    }

    /// Build a pool whose cursor starts at `start` (taken modulo the pool size)
    pub fn starting_at<I, S>(credentials: I, start: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let credentials: Vec<Credential> = credentials.into_iter().map(Credential::new).collect();
        let start = if credentials.is_empty() {
            0
        } else {
            start % credentials.len()
        };

        Self {
            credentials,
            cursor: AtomicUsize::new(start),
        }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Current cursor position, always `< len()` for a non-empty pool
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Credential at a ring position
    pub fn get(&self, index: usize) -> Option<&Credential> {
        self.credentials.get(index)
    }

    /// Ring positions for one full pass, starting at the cursor.
    ///
    /// Each position appears exactly once.
    pub fn attempt_order(&self) -> Vec<usize> {
        let len = self.len();
        let start = self.cursor();
        (0..len).map(|offset| (start + offset) % len).collect()
    }

    /// Move the cursor past a success found `offset` steps into the pass.
    ///
    /// The update is a single atomic read-modify-write, so concurrent
    /// successes add up instead of overwriting each other and the cursor
    /// never leaves `0..len()`.
    pub fn advance_past(&self, offset: usize) {
        let len = self.len();
        if len == 0 {
            return;
        }

        let step = (offset % len) + 1;
        // The closure always returns Some, so this can't fail.
        let _ = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some((current + step) % len)
            });
    }
}
