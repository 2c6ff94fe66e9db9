use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::column::Column;
use super::error::DbError;

/// In-memory schema store: table name -> ordered column list.
///
/// Backed by a `BTreeMap` so that `list_tables` output and the persisted
/// metadata file are deterministic. Mutations are persisted by the caller
/// through the storage layer; the catalog itself never touches disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tables: BTreeMap<String, Vec<Column>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str, columns: Vec<Column>) -> Result<(), DbError> {
        if self.tables.contains_key(name) {
            return Err(DbError::TableExists(name.to_string()));
        }
        self.tables.insert(name.to_string(), columns);
        Ok(())
    }

    pub fn drop(&mut self, name: &str) -> Result<Vec<Column>, DbError> {
        self.tables
            .remove(name)
            .ok_or_else(|| DbError::TableNotFound(name.to_string()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Column]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    pub fn columns(&self, name: &str) -> Result<&[Column], DbError> {
        self.get(name)
            .ok_or_else(|| DbError::TableNotFound(name.to_string()))
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }
}
