//! Flat CSV projection of a result set.
//!
//! Only the data shape is owned here; writing the bytes to a file (or a
//! browser download) belongs to the caller.

use crate::types::ResultSet;

/// Header row, matching the extraction column contract.
pub const CSV_HEADER: &str = "Name,Phone,Email,Address,Website,Rating,Google Maps URL";

/// Project every record to one escaped CSV row, in set order.
///
/// Every field is wrapped in quotes with embedded quotes doubled; missing
/// fields render as an empty quoted cell. One row per record, always —
/// the projection never skips.
pub fn project_rows(results: &ResultSet) -> Vec<String> {
    results
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                r.phone.as_str(),
                r.email.as_str(),
                r.address.as_str(),
                r.website.as_str(),
                r.rating.as_str(),
                r.maps_url.as_str(),
            ]
            .map(escape_field)
            .join(",")
        })
        .collect()
}

/// Full CSV document: header plus one row per record, UTF-8.
pub fn to_csv(results: &ResultSet) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(project_rows(results));
    lines.join("\n")
}

fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
