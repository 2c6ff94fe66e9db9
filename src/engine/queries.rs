/// Read path: predicate evaluation and the memoized select scan.
use crate::core::{Catalog, DbError, Row};
use crate::parser::Predicate;
use crate::storage::Storage;

use super::cache::ResultCache;

/// A row matches when every predicate entry equals the row's value
/// exactly, in type and value. An empty predicate matches everything; a
/// missing field never matches.
#[must_use]
pub fn matches(row: &Row, filter: &Predicate) -> bool {
    filter.iter().all(|(column, value)| row.get(column) == Some(value))
}

pub struct QueryExecutor;

impl QueryExecutor {
    /// Linear predicate scan with read-through memoization: the filtered
    /// result is cached under (table, canonical predicate) and reused
    /// until a write to the same table invalidates it.
    pub fn select(
        catalog: &Catalog,
        cache: &mut ResultCache,
        storage: &Storage,
        table: &str,
        filter: Option<&Predicate>,
    ) -> Result<Vec<Row>, DbError> {
        if !catalog.contains(table) {
            return Err(DbError::TableNotFound(table.to_string()));
        }

        let key = ResultCache::key(filter);
        if let Some(cached) = cache.get(table, &key) {
            return Ok(cached.clone());
        }

        let rows = storage.load_rows(table)?;
        let result: Vec<Row> = match filter {
            None => rows,
            Some(filter) if filter.is_empty() => rows,
            Some(filter) => rows.into_iter().filter(|r| matches(r, filter)).collect(),
        };

        cache.put(table, key, result.clone());
        Ok(result)
    }
}
