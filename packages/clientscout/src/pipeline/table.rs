//! Markdown table parsing for backend replies.
//!
//! The backend is instructed to return a single markdown table, but real
//! replies arrive with framing noise: commentary around the table, a
//! header phrased loosely, sometimes a dropped trailing column. The parser
//! scans line by line and keeps every row it can make sense of instead of
//! validating the reply as a whole. A well-formed "nothing found" reply
//! and a garbled one are indistinguishable from text alone, so both parse
//! to an empty list rather than an error.

use tracing::debug;
use uuid::Uuid;

use crate::pipeline::normalize::{normalize_cell, normalize_url};
use crate::types::BusinessRecord;

/// Minimum cells for a usable row; tolerates a backend that drops the
/// trailing optional columns.
const MIN_CELLS: usize = 5;

/// Parse a backend reply into business records, in source order.
///
/// Rows with fewer than [`MIN_CELLS`] cells are dropped silently — a
/// policy choice, not an accident: the skipped count is logged but not
/// surfaced to callers.
pub fn parse_markdown_table(reply: &str) -> Vec<BusinessRecord> {
    let mut records = Vec::new();
    let mut header_seen = false;
    let mut skipped_rows = 0usize;

    for line in reply.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') {
            continue;
        }

        // The |---|---| separator row doubles as the header marker.
        if is_separator_row(trimmed) {
            header_seen = true;
            continue;
        }

        // Until the separator shows up, a row naming both "name" and
        // "phone" is taken to be the header, however it is phrased.
        if !header_seen && looks_like_header(trimmed) {
            header_seen = true;
            continue;
        }

        let cells = split_row(trimmed);
        if cells.len() < MIN_CELLS {
            skipped_rows += 1;
            continue;
        }

        records.push(record_from_cells(&cells));
    }

    debug!(
        rows = records.len(),
        skipped = skipped_rows,
        reply_len = reply.len(),
        "Parsed reply table"
    );

    records
}

/// A row made of nothing but pipes, dashes, colons, and spacing.
fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
}

fn looks_like_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("name") && lower.contains("phone")
}

/// Split on pipes, trimming cells and dropping only the artifact empties
/// produced by a leading/trailing delimiter. Interior empty cells are real
/// "missing value" cells and stay.
fn split_row(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells
}

/// Map cells positionally; columns beyond the available cells are empty.
fn record_from_cells(cells: &[&str]) -> BusinessRecord {
    let cell = |i: usize| normalize_cell(cells.get(i).copied().unwrap_or("")).to_string();
    let url = |i: usize| normalize_url(cells.get(i).copied().unwrap_or(""));

    BusinessRecord {
        id: Uuid::new_v4(),
        name: cell(0),
        phone: cell(1),
        email: cell(2),
        address: cell(3),
        website: url(4),
        rating: cell(5),
        maps_url: url(6),
    }
}
