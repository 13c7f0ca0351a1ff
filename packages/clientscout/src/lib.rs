//! Incremental business-lead extraction over a conversational backend.
//!
//! A user describes a target customer profile in natural language; the
//! library drives a generative backend session to produce a deduplicated
//! table of real businesses with contact details, grown incrementally
//! across repeated "find more" rounds.
//!
//! # Design Philosophy
//!
//! - The backend is an opaque capability: send text, get text back.
//! - Replies are semi-structured and unreliable; the parser is lenient
//!   and never fails, it just keeps what it can.
//! - Records are immutable once parsed; the result set only grows, and
//!   only through signature-based merging.
//! - The accumulated session transcript is what makes "find more" work —
//!   one session per search, reused for every round.
//!
//! # Usage
//!
//! ```rust,ignore
//! use clientscout::{backend, export, Scout};
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//! let session = backend::open_session(&client, backend::DEFAULT_MODEL);
//! let mut scout = Scout::new(session);
//!
//! let mut results = scout.initial_search("plumbers in Mesa, AZ").await?;
//! results = scout.more_results(&results).await?; // same session, new rows only
//!
//! let csv = export::to_csv(&results);
//! ```
//!
//! # Modules
//!
//! - [`types`] - `BusinessRecord` and the order-preserving `ResultSet`
//! - [`traits`] - the `ChatBackend` seam the pipeline talks through
//! - [`pipeline`] - prompts, table parsing, normalization, merging
//! - [`export`] - flat CSV projection of a result set
//! - [`backend`] - Gemini-backed sessions (feature `gemini`)
//! - [`testing`] - scripted backend for driving the pipeline in tests

pub mod error;
pub mod export;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod backend;

// Re-export core types at crate root
pub use error::{Result, ScoutError};
pub use pipeline::{
    build_search_prompt, merge, normalize_cell, normalize_url, parse_markdown_table, Scout,
    SearchMode, SYSTEM_INSTRUCTION,
};
pub use traits::ChatBackend;
pub use types::{BusinessRecord, ResultSet};

#[cfg(feature = "gemini")]
pub use backend::{open_session, open_session_from_env, DEFAULT_MODEL};
