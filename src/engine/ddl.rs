/// DDL operations: create_table, drop_table, list_tables, info.
use crate::core::{Catalog, Column, DataType, DbError, ID_COLUMN};
use crate::storage::Storage;

use super::cache::ResultCache;

pub struct DdlExecutor;

impl DdlExecutor {
    /// Creates a table from caller-supplied (name, type-label) pairs.
    ///
    /// The synthetic `ID:int` column is prepended before validation; a
    /// caller column literally named `ID` is rejected rather than
    /// shadowed. The caller persists the catalog afterwards.
    pub fn create_table(
        catalog: &mut Catalog,
        name: &str,
        columns: &[(String, String)],
    ) -> Result<Vec<Column>, DbError> {
        if catalog.contains(name) {
            return Err(DbError::TableExists(name.to_string()));
        }

        let mut cols = Vec::with_capacity(columns.len() + 1);
        cols.push(Column::new(ID_COLUMN, DataType::Int));
        for (col_name, label) in columns {
            if col_name == ID_COLUMN {
                return Err(DbError::ReservedColumn(col_name.clone()));
            }
            let data_type =
                DataType::parse(label).ok_or_else(|| DbError::InvalidType(label.clone()))?;
            cols.push(Column::new(col_name.clone(), data_type));
        }

        catalog.create(name, cols.clone())?;
        Ok(cols)
    }

    /// Drops a table's schema entry and clears its persisted dataset.
    ///
    /// Clearing the data file is best-effort: the drop still succeeds if
    /// it fails, favoring metadata consistency over data cleanup. The
    /// caller persists the catalog afterwards.
    pub fn drop_table(
        catalog: &mut Catalog,
        cache: &mut ResultCache,
        storage: &Storage,
        name: &str,
    ) -> Result<(), DbError> {
        catalog.drop(name)?;
        let _ = storage.save_rows(name, &[]);
        cache.invalidate(name);
        Ok(())
    }

    #[must_use]
    pub fn list_tables(catalog: &Catalog) -> Vec<String> {
        catalog.names()
    }

    /// Returns a table's column list and current row count.
    pub fn info(
        catalog: &Catalog,
        storage: &Storage,
        name: &str,
    ) -> Result<(Vec<Column>, usize), DbError> {
        let columns = catalog.columns(name)?.to_vec();
        let rows = storage.load_rows(name)?;
        Ok((columns, rows.len()))
    }
}
