/// DML operations: insert, update, delete.
///
/// Every operation loads the table's dataset fresh from storage, mutates
/// it, persists the full dataset, and invalidates the table's cached
/// select results.
use crate::core::{Catalog, Column, DbError, ID_COLUMN, Row, Value};
use crate::storage::Storage;

use super::cache::ResultCache;
use super::queries::matches;
use crate::parser::{Assignments, Predicate};

pub struct DmlExecutor;

impl DmlExecutor {
    /// Appends one row. The row's ID is one plus the maximum existing ID
    /// (1 for an empty table), so IDs are never reused after deletes.
    pub fn insert(
        catalog: &Catalog,
        cache: &mut ResultCache,
        storage: &Storage,
        table: &str,
        values: Vec<Value>,
    ) -> Result<Vec<Row>, DbError> {
        let columns = catalog.columns(table)?;
        let declared = &columns[1..]; // everything but the synthetic ID
        if values.len() != declared.len() {
            return Err(DbError::ArityMismatch {
                expected: declared.len(),
                got: values.len(),
            });
        }

        let mut rows = storage.load_rows(table)?;
        let next_id = rows.iter().map(Row::id).max().unwrap_or(0) + 1;

        let mut row = Row::new();
        row.set(ID_COLUMN, Value::Int(next_id));
        for (column, value) in declared.iter().zip(values) {
            Self::check_type(column, &value)?;
            row.set(column.name.clone(), value);
        }

        rows.push(row);
        storage.save_rows(table, &rows)?;
        cache.invalidate(table);
        Ok(rows)
    }

    /// Applies assignments to every row matching the predicate, in a
    /// single in-place scan. On a type-check failure nothing is
    /// persisted; the error propagates before the dataset is saved.
    /// Returns the full dataset and the number of rows updated.
    pub fn update(
        catalog: &Catalog,
        cache: &mut ResultCache,
        storage: &Storage,
        table: &str,
        assignments: &Assignments,
        filter: &Predicate,
    ) -> Result<(Vec<Row>, usize), DbError> {
        let columns = catalog.columns(table)?;
        let mut rows = storage.load_rows(table)?;

        let mut updated = 0;
        for row in &mut rows {
            if !matches(row, filter) {
                continue;
            }
            for (name, value) in assignments {
                let column = columns
                    .iter()
                    .find(|c| &c.name == name)
                    .ok_or_else(|| DbError::UnknownColumn(name.clone()))?;
                Self::check_type(column, value)?;
                row.set(name.clone(), value.clone());
            }
            updated += 1;
        }

        storage.save_rows(table, &rows)?;
        cache.invalidate(table);
        Ok((rows, updated))
    }

    /// Removes every row matching the predicate and persists the kept
    /// subset. Returns the kept rows and the number removed.
    pub fn delete(
        catalog: &Catalog,
        cache: &mut ResultCache,
        storage: &Storage,
        table: &str,
        filter: &Predicate,
    ) -> Result<(Vec<Row>, usize), DbError> {
        if !catalog.contains(table) {
            return Err(DbError::TableNotFound(table.to_string()));
        }
        let rows = storage.load_rows(table)?;
        let before = rows.len();
        let kept: Vec<Row> = rows.into_iter().filter(|r| !matches(r, filter)).collect();
        let removed = before - kept.len();

        storage.save_rows(table, &kept)?;
        cache.invalidate(table);
        Ok((kept, removed))
    }

    /// A value must carry exactly the column's declared type. Int and
    /// Bool stay disjoint here: `true` is not a valid int.
    fn check_type(column: &Column, value: &Value) -> Result<(), DbError> {
        if value.data_type() == column.data_type {
            Ok(())
        } else {
            Err(DbError::TypeMismatch {
                column: column.name.clone(),
                expected: column.data_type,
            })
        }
    }
}
