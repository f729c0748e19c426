//! Error types.
//!
//! The page has no user-visible error channel; these types exist so that the
//! host boundary (DOM calls, JSON encoding) can be propagated with `?` up to
//! the one place that logs them.

use thiserror::Error;

/// Failure while building the head element plan.
#[derive(Debug, Error)]
pub enum SeoError {
    /// The structured-data document could not be encoded.
    #[error("failed to encode structured data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a [`crate::head::HeadHost`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeadError {
    /// The host has no document head to write into.
    #[error("document has no <head> element")]
    MissingHead,

    /// The host rejected an operation on `<{tag}>`.
    #[error("host failed on <{tag}>: {message}")]
    Host {
        /// Tag of the element being created or appended.
        tag: &'static str,
        /// Host-provided description.
        message: String,
    },
}
