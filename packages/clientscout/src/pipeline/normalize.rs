//! Cell-level cleanup for parsed table values.

use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static ANGLE_WRAPPED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([^>]+)>").unwrap());

/// Collapse the backend's "not found" placeholders to an empty string.
///
/// Only placeholder collapsing; the parser has already trimmed the cell.
pub fn normalize_cell(text: &str) -> &str {
    match text {
        "" | "N/A" | "n/a" | "-" => "",
        other => other,
    }
}

/// Clean a URL-bearing cell.
///
/// Markdown links (`[label](target)`) and angle-bracket wrapping
/// (`<target>`) are unwrapped to the bare target. Anything else passes
/// through unchanged, best effort — the backend may have returned a bare
/// domain, which is still worth displaying.
pub fn normalize_url(text: &str) -> String {
    let cleaned = normalize_cell(text);
    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(caps) = MARKDOWN_LINK.captures(cleaned) {
        return caps[2].to_string();
    }
    if let Some(caps) = ANGLE_WRAPPED.captures(cleaned) {
        return caps[1].to_string();
    }

    cleaned.to_string()
}
