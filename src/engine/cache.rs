use std::collections::HashMap;

use crate::core::Row;
use crate::parser::Predicate;

/// Memoizes filtered select results within a session.
///
/// Entries are scoped per table and cleared whenever that table is
/// written (insert/update/delete/drop), so a cached read never outlives
/// the data it was computed from. No size bound and no eviction beyond
/// write invalidation.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, HashMap<String, Vec<Row>>>,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical key for a predicate. Predicates are `BTreeMap`s, so the
    /// debug rendering is deterministic for equal predicates.
    #[must_use]
    pub fn key(filter: Option<&Predicate>) -> String {
        format!("{filter:?}")
    }

    #[must_use]
    pub fn get(&self, table: &str, key: &str) -> Option<&Vec<Row>> {
        self.entries.get(table)?.get(key)
    }

    pub fn put(&mut self, table: &str, key: String, rows: Vec<Row>) {
        self.entries
            .entry(table.to_string())
            .or_default()
            .insert(key, rows);
    }

    /// Drops every cached result for one table.
    pub fn invalidate(&mut self, table: &str) {
        self.entries.remove(table);
    }
}
