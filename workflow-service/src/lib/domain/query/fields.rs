use std::cmp::Ordering;

use chrono::NaiveDate;

/// Typed sort key extracted from a resource field.
///
/// Each sortable field of a resource always yields the same variant; the
/// cross-variant ordering only exists to keep `Ord` total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

impl SortKey {
    /// Build a text key ordered case-insensitively.
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(_), _) => Ordering::Less,
            (_, SortKey::Text(_)) => Ordering::Greater,
            (SortKey::Int(_), _) => Ordering::Less,
            (_, SortKey::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Accessor extracting the sort key for one recognized field.
pub type SortAccessor<T> = fn(&T) -> SortKey;

/// Per-resource field description consumed by the query engine.
///
/// Sort fields are a closed set of name-to-accessor mappings declared by
/// each resource, so a caller-supplied field name can never reach past the
/// fields the resource chose to expose.
pub trait Queryable {
    /// Field values matched case-insensitively against the search term.
    fn search_text(&self) -> Vec<&str>;

    /// Accessor for a recognized sort field name, `None` for anything else.
    fn sort_accessor(field: &str) -> Option<SortAccessor<Self>>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keys_ignore_case() {
        assert_eq!(SortKey::text("Alice"), SortKey::text("ALICE"));
        assert!(SortKey::text("alice") < SortKey::text("Bob"));
    }

    #[test]
    fn test_int_and_date_ordering() {
        assert!(SortKey::Int(1) < SortKey::Int(2));
        assert!(
            SortKey::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                < SortKey::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
    }
}
