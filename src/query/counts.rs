//! Category counting
//!
//! Computes category occurrence counts over a corpus and keeps the counts
//! of the last computed corpus in a caller-owned [`CountsStore`]. The store
//! is a plain value threaded through calls; a host that shares one store
//! across threads wraps it in a mutex.

use std::collections::BTreeMap;

use crate::core::model::Record;

/// Count every category carried by every record, lowercased. A category
/// listed twice on one card still counts once for that card.
pub fn count_categories(records: &[Record]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        for category in record.category_set() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }
    counts
}

/// Last-computed category counts for a corpus.
///
/// Empty at start; each computation over a non-empty record list replaces
/// the stored counts wholesale. A computation over zero records leaves the
/// stored counts untouched.
#[derive(Debug, Clone, Default)]
pub struct CountsStore {
    last: BTreeMap<String, usize>,
}

impl CountsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute counts for `records`, store them, and return the stored
    /// counts. With no records the previously stored counts are returned
    /// unchanged.
    pub fn update(&mut self, records: &[Record]) -> &BTreeMap<String, usize> {
        if !records.is_empty() {
            self.last = count_categories(records);
        }
        &self.last
    }

    /// Replace the stored counts with an already-computed mapping.
    pub fn replace(&mut self, counts: BTreeMap<String, usize>) {
        self.last = counts;
    }

    /// The stored counts; empty when nothing has been computed yet.
    pub fn current(&self) -> &BTreeMap<String, usize> {
        &self.last
    }
}
