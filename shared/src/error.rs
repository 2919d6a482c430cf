//! Error types. None of them is fatal: callers log and degrade.

use thiserror::Error;

use crate::lifecycle::Phase;

/// Failure while reading or writing the persisted preference blob.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The browser refused to hand out a storage object (private mode,
    /// disabled cookies, no window).
    #[error("key-value storage is unavailable")]
    Unavailable,
    /// Reading the raw value failed.
    #[error("failed to read `{key}`: {reason}")]
    Read {
        /// Storage key that was being read.
        key: String,
        /// Backend-provided reason.
        reason: String,
    },
    /// Writing or deleting the raw value failed (quota, permissions).
    #[error("failed to write `{key}`: {reason}")]
    Write {
        /// Storage key that was being written.
        key: String,
        /// Backend-provided reason.
        reason: String,
    },
    /// The stored text is not a JSON object, or a value could not be encoded.
    #[error("invalid JSON in preference store: {0}")]
    Json(#[from] serde_json::Error),
}

/// Attempt to move the page lifecycle backwards or skip a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal lifecycle transition from {from:?} to {to:?}")]
pub struct LifecycleError {
    /// Phase the page was in.
    pub from: Phase,
    /// Phase that was requested.
    pub to: Phase,
}

/// Failure of an asynchronous clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// `navigator.clipboard.writeText` does not exist in this context.
    #[error("clipboard API is not available")]
    Unsupported,
    /// The browser rejected the write (permissions, no user gesture).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
