//! Core data types: discovered businesses and the accumulated result set.

use serde::Serialize;
use uuid::Uuid;

/// One discovered business with its contact details.
///
/// Created only by the table parser, one record per parsed row, and never
/// mutated afterwards. Absent or unknown values are empty strings — the
/// backend's placeholder markers ("N/A", "-") are collapsed at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRecord {
    /// Opaque row identity, assigned at parse time and never reused.
    /// Not part of business identity — see [`BusinessRecord::signature`].
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    /// e.g. "4.8 (120)"
    pub rating: String,
    /// Direct link to the Google Maps listing.
    pub maps_url: String,
}

impl BusinessRecord {
    /// Identity signature: two records with the same signature denote the
    /// same real-world business, whatever their other fields say.
    ///
    /// Derived on demand from the name and address (case-insensitive,
    /// whitespace-collapsed) rather than stored, so it cannot go stale if
    /// the normalization rules evolve.
    pub fn signature(&self) -> String {
        format!("{}|{}", normalize_key(&self.name), normalize_key(&self.address))
    }
}

/// Lowercase and collapse runs of whitespace.
fn normalize_key(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered, deduplicated collection of businesses for one search.
///
/// Insertion order is discovery order. No two members share an identity
/// signature; growth goes through [`crate::pipeline::dedupe::merge`], which
/// maintains that invariant. A new search starts from [`ResultSet::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    records: Vec<BusinessRecord>,
}

impl ResultSet {
    /// Empty result set (a brand-new search).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BusinessRecord> {
        self.records.iter()
    }

    /// Build from records already known to be signature-unique.
    pub(crate) fn from_unique(records: Vec<BusinessRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a BusinessRecord;
    type IntoIter = std::slice::Iter<'a, BusinessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, address: &str, phone: &str) -> BusinessRecord {
        BusinessRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: String::new(),
            address: address.to_string(),
            website: String::new(),
            rating: String::new(),
            maps_url: String::new(),
        }
    }

    #[test]
    fn test_signature_ignores_case_and_whitespace() {
        let a = record("Joe's  Plumbing", "12 Oak St,  Mesa", "555");
        let b = record("joe's plumbing", "12 OAK ST, MESA", "999");
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_signature_ignores_other_fields() {
        let a = record("Acme", "1 Main St", "(555) 123-4567");
        let mut b = record("Acme", "1 Main St", "(555) 000-0000");
        b.email = "info@acme.com".to_string();
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_different_address_means_different_business() {
        let a = record("Acme", "1 Main St", "555");
        let b = record("Acme", "2 Main St", "555");
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_empty_result_set() {
        let set = ResultSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.records().is_empty());
    }
}
