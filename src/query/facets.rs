//! Facet derivation
//!
//! Distinct value sets for populating filter options, recomputed from
//! the snapshot on every call. Collections are small by design, so
//! consistency wins over incremental index maintenance.

use std::collections::BTreeSet;

use crate::model::Record;

/// Distinct counts for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSummary {
    /// Number of records in the set
    pub total: usize,
    /// Distinct categories
    pub categories: usize,
    /// Distinct cities
    pub cities: usize,
    /// Distinct regions
    pub regions: usize,
}

/// Derives facet option lists from a collection snapshot.
pub struct FacetIndex;

impl FacetIndex {
    /// Sorted distinct city values, case-sensitive as stored.
    pub fn cities(records: &[Record]) -> Vec<String> {
        Self::distinct(records, |r| &r.city)
    }

    /// Sorted distinct region values.
    pub fn regions(records: &[Record]) -> Vec<String> {
        Self::distinct(records, |r| &r.region)
    }

    /// Sorted distinct category values.
    pub fn categories(records: &[Record]) -> Vec<String> {
        Self::distinct(records, |r| &r.category)
    }

    /// Distinct counts over `records`.
    pub fn summary(records: &[Record]) -> FacetSummary {
        FacetSummary {
            total: records.len(),
            categories: Self::categories(records).len(),
            cities: Self::cities(records).len(),
            regions: Self::regions(records).len(),
        }
    }

    fn distinct(records: &[Record], field: impl Fn(&Record) -> &String) -> Vec<String> {
        records
            .iter()
            .map(|r| field(r).clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
