//! Typed errors for the lead extraction pipeline.
//!
//! Only two things can go wrong from a caller's point of view: the session
//! could not be configured, or a backend round trip failed. Unparseable
//! reply text is deliberately not an error — see
//! [`crate::pipeline::table::parse_markdown_table`].

use thiserror::Error;

/// Errors that can occur while running a lead search.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Required credential or configuration absent. Raised before any
    /// network call is attempted.
    #[error("config error: {0}")]
    Config(String),

    /// The backend session call failed or returned no usable reply. Not
    /// retried here; retry policy belongs to the caller.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ScoutError>;
