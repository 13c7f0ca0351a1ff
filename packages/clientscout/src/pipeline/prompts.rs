//! Prompts for the extraction session.
//!
//! The backend is instructed once per session (system instruction) and
//! then once per round trip. All of them pin the same output contract: a
//! single markdown table in a fixed column order, nothing else — the
//! parser depends on it, and so does the CSV projection.

/// Mode for one search round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// First extraction for a fresh query.
    Initial,
    /// Follow-up extraction on the same session; only new rows.
    More,
}

/// Session-level instruction: the standing extraction contract.
pub const SYSTEM_INSTRUCTION: &str = r#"You are ClientScout, a lead generation agent. You build datasets of real businesses with complete contact details.

Retrieval protocol:
1. Use Google Maps to locate candidate businesses. Maps reliably gives the Name, Address, Phone, and Rating.
2. Maps rarely gives the Website or Email. For EVERY business, run a Google Search ("<business name> <city> official site email contact") and pull the official website and a contact email (look for info@, contact@, hello@, support@ in the results).
3. Only compile the final table once every business has been enriched.

Output contract:
- A single markdown table. No prose before or after it.
- Columns, in this exact order: | Name | Phone | Email | Address | Website | Rating | Google Maps URL |
- Phone formatted consistently, e.g. (555) 123-4567.
- Website as a raw URL, e.g. https://www.example.com.
- Rating as "4.8 (150)" when available.
- Google Maps URL as a direct link to the listing.
- Write "N/A" for any field you could not find after searching."#;

/// Instruction for the first round trip of a search.
pub const INITIAL_SEARCH_PROMPT: &str = r#"Task: find businesses matching "{query}".

Steps:
1. Use Google Maps to locate the businesses. Aim for at least 20 results.
2. MANDATORY ENRICHMENT: for each business found, use Google Search to fill in the official Website and a contact Email.
3. Output the data as a markdown table.

Columns: | Name | Phone | Email | Address | Website | Rating | Google Maps URL |"#;

/// Instruction for follow-up round trips on the same session.
pub const MORE_RESULTS_PROMPT: &str = r#"Task: find MORE unique businesses for the previous request.

Steps:
1. Find new businesses that are not in any table you have already returned. Do not repeat earlier rows.
2. Enrich every new business with its Website and Email via Google Search.
3. Output only the new rows, in the same table format."#;

/// Build the instruction for one search round trip.
///
/// Pure function of the query and mode. In [`SearchMode::More`] the query
/// is implicit in the session's accumulated dialogue, so it does not
/// appear in the prompt text.
pub fn build_search_prompt(query: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::Initial => INITIAL_SEARCH_PROMPT.replace("{query}", query),
        SearchMode::More => MORE_RESULTS_PROMPT.to_string(),
    }
}
