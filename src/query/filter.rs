//! Category matching
//!
//! All matching is case-insensitive over trimmed category tokens. A query
//! that normalizes to the empty set matches nothing.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::fields::split_categories;
use crate::core::model::Record;

/// A normalized category query: lowercased, trimmed, empty entries dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    categories: BTreeSet<String>,
}

impl CategoryQuery {
    /// Build a query from raw user input. Each entry may itself be a
    /// comma/semicolon-joined list.
    pub fn parse<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories = inputs
            .into_iter()
            .flat_map(|input| split_categories(input.as_ref()))
            .map(|category| category.to_lowercase())
            .collect();
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn intersects(&self, set: &BTreeSet<String>) -> bool {
        self.categories.iter().any(|category| set.contains(category))
    }

    fn subset_of(&self, set: &BTreeSet<String>) -> bool {
        self.categories.iter().all(|category| set.contains(category))
    }
}

/// Records whose category set intersects the query, in input order. An
/// empty query yields no records, never all of them.
pub fn any_of(query: &CategoryQuery, records: Vec<Record>) -> Vec<Record> {
    if query.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|record| query.intersects(&record.category_set()))
        .collect()
}

/// Records whose category set contains every query category, in input
/// order. An empty query yields no records.
pub fn all_of(query: &CategoryQuery, records: Vec<Record>) -> Vec<Record> {
    if query.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|record| query.subset_of(&record.category_set()))
        .collect()
}

/// Outcome of a category diff over a corpus.
#[derive(Debug, Default)]
pub struct DiffReport {
    /// Records that carry the first category but not the second.
    pub matches: Vec<Record>,

    /// Whole-corpus category counts; every record contributes, match or not.
    pub counts: BTreeMap<String, usize>,

    /// Records carrying the first category, match or not.
    pub with_a: usize,

    /// Records carrying the second category, match or not.
    pub with_b: usize,

    /// Total records examined.
    pub total: usize,
}

/// Records that have `cat_a` but lack `cat_b`, plus whole-corpus category
/// counts and the per-category record totals.
pub fn diff(cat_a: &str, cat_b: &str, records: Vec<Record>) -> DiffReport {
    let cat_a = cat_a.trim().to_lowercase();
    let cat_b = cat_b.trim().to_lowercase();

    let mut report = DiffReport {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        let set = record.category_set();
        for category in &set {
            *report.counts.entry(category.clone()).or_insert(0) += 1;
        }
        if set.contains(&cat_a) {
            report.with_a += 1;
        }
        if set.contains(&cat_b) {
            report.with_b += 1;
        }
        if set.contains(&cat_a) && !set.contains(&cat_b) {
            report.matches.push(record);
        }
    }

    report
}
