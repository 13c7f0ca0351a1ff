//! The extraction pipeline.
//!
//! One search is one conversational session. Each round trip sends an
//! instruction, parses whatever table came back, and merges the rows into
//! the accumulated result set:
//!
//! query → prompt → backend → raw text → parse → normalize → merge
//!
//! The pipeline suspends only at the backend's send boundary; everything
//! after the reply arrives is pure.

pub mod dedupe;
pub mod normalize;
pub mod prompts;
pub mod table;

pub use dedupe::merge;
pub use normalize::{normalize_cell, normalize_url};
pub use prompts::{build_search_prompt, SearchMode, SYSTEM_INSTRUCTION};
pub use table::parse_markdown_table;

use tracing::info;

use crate::error::Result;
use crate::traits::ChatBackend;
use crate::types::ResultSet;

/// Orchestrates one search: a single backend session plus the query it was
/// opened for.
///
/// At most one extraction call is in flight per session — `&mut self` on
/// the search methods makes overlapping calls unrepresentable. The caller
/// owns the accumulated [`ResultSet`] and swaps it for each returned
/// value; a result the caller abandons is simply never merged.
pub struct Scout<B: ChatBackend> {
    backend: B,
    query: Option<String>,
}

impl<B: ChatBackend> Scout<B> {
    /// Wrap an open backend session. One session per search — reusing a
    /// session across searches would leak earlier context into the
    /// backend's answers.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            query: None,
        }
    }

    /// First extraction round for a query.
    ///
    /// Returns the initial result set, already deduplicated within the
    /// reply itself. A reply with no recognizable rows is a valid empty
    /// result, not an error.
    pub async fn initial_search(&mut self, query: &str) -> Result<ResultSet> {
        self.query = Some(query.to_string());

        let prompt = build_search_prompt(query, SearchMode::Initial);
        let reply = self.backend.send(&prompt).await?;
        let records = parse_markdown_table(&reply);

        info!(query, parsed = records.len(), "Initial search round complete");

        Ok(merge(&ResultSet::new(), records))
    }

    /// Follow-up round on the same session.
    ///
    /// New rows are appended to `existing` in reply order; rows the
    /// backend repeated anyway are discarded by signature. `existing` is
    /// untouched.
    pub async fn more_results(&mut self, existing: &ResultSet) -> Result<ResultSet> {
        let query = self.query.clone().unwrap_or_default();

        let prompt = build_search_prompt(&query, SearchMode::More);
        let reply = self.backend.send(&prompt).await?;
        let records = parse_markdown_table(&reply);

        let merged = merge(existing, records);
        info!(
            query = %query,
            admitted = merged.len() - existing.len(),
            total = merged.len(),
            "More-results round complete"
        );

        Ok(merged)
    }

    /// The underlying session, e.g. to inspect a transcript or a test
    /// double's recorded prompts.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBackend;
    use crate::ScoutError;

    const FIRST_REPLY: &str = "\
| Name | Phone | Email | Address | Website | Rating | Google Maps URL |
|---|---|---|---|---|---|---|
| Joe's Plumbing | (555) 123-4567 | N/A | 12 Oak St, Mesa, AZ | joesplumbing.com | 4.8 (120) | https://maps.example/1 |
| Desert Drains | (555) 987-6543 | info@dd.com | 44 Palm Ave, Mesa, AZ | desertdrains.com | 4.5 (80) | https://maps.example/2 |";

    const MORE_REPLY: &str = "\
| Name | Phone | Email | Address | Website | Rating | Google Maps URL |
|---|---|---|---|---|---|---|
| Joe's Plumbing | (555) 123-4567 | N/A | 12 Oak St, Mesa, AZ | joesplumbing.com | 4.8 (120) | https://maps.example/1 |
| Cactus Pipeworks | (555) 222-3333 | hi@cactus.com | 9 Saguaro Rd, Mesa, AZ | cactus.com | 4.9 (40) | https://maps.example/3 |";

    #[tokio::test]
    async fn test_initial_search_parses_and_dedupes_reply() {
        let backend = ScriptedBackend::new().with_reply(FIRST_REPLY);
        let mut scout = Scout::new(backend);

        let results = scout.initial_search("plumbers in Mesa, AZ").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results.records()[0].name, "Joe's Plumbing");
        assert_eq!(results.records()[0].email, "");

        let prompts = scout.backend().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("plumbers in Mesa, AZ"));
    }

    #[tokio::test]
    async fn test_more_results_appends_only_new_rows() {
        let backend = ScriptedBackend::new()
            .with_reply(FIRST_REPLY)
            .with_reply(MORE_REPLY);
        let mut scout = Scout::new(backend);

        let first = scout.initial_search("plumbers in Mesa, AZ").await.unwrap();
        let second = scout.more_results(&first).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);

        let names: Vec<_> = second.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Joe's Plumbing", "Desert Drains", "Cactus Pipeworks"]);

        // The repeated row did not displace the original.
        assert_eq!(first.records()[0].id, second.records()[0].id);
    }

    #[tokio::test]
    async fn test_replaying_the_same_reply_grows_nothing() {
        let backend = ScriptedBackend::new()
            .with_reply(FIRST_REPLY)
            .with_reply(FIRST_REPLY);
        let mut scout = Scout::new(backend);

        let first = scout.initial_search("plumbers").await.unwrap();
        let second = scout.more_results(&first).await.unwrap();

        assert_eq!(first.len(), second.len());
    }

    #[tokio::test]
    async fn test_empty_reply_is_an_empty_result_not_an_error() {
        let backend = ScriptedBackend::new().with_reply("No businesses found, sorry!");
        let mut scout = Scout::new(backend);

        let results = scout.initial_search("unicorn wranglers").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_as_backend_error() {
        let backend = ScriptedBackend::new().with_error("model overloaded");
        let mut scout = Scout::new(backend);

        let err = scout.initial_search("plumbers").await.unwrap_err();
        assert!(matches!(err, ScoutError::Backend(_)));
        assert!(err.to_string().contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_failed_more_round_leaves_existing_usable() {
        let backend = ScriptedBackend::new()
            .with_reply(FIRST_REPLY)
            .with_error("quota exhausted");
        let mut scout = Scout::new(backend);

        let first = scout.initial_search("plumbers").await.unwrap();
        let err = scout.more_results(&first).await.unwrap_err();

        assert!(matches!(err, ScoutError::Backend(_)));
        assert_eq!(first.len(), 2);
    }
}
