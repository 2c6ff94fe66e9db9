//! JSON file persistence: one metadata file for the catalog and one
//! `<table>.json` per table holding its row array.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::{Catalog, DbError, Row};

const META_FILE: &str = "db_meta.json";

pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self, DbError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn meta_path(&self) -> PathBuf {
        self.data_dir.join(META_FILE)
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.data_dir.join(format!("{table}.json"))
    }

    /// Loads the persisted catalog, or an empty one when no metadata
    /// file exists yet.
    pub fn load_schema(&self) -> Result<Catalog, DbError> {
        match fs::read_to_string(self.meta_path()) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Catalog::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the persisted metadata. Failure here is fatal to the
    /// caller.
    pub fn save_schema(&self, catalog: &Catalog) -> Result<(), DbError> {
        let text = serde_json::to_string_pretty(catalog)?;
        fs::write(self.meta_path(), text)?;
        Ok(())
    }

    /// Loads a table's dataset, or an empty one when no data file exists.
    pub fn load_rows(&self, table: &str) -> Result<Vec<Row>, DbError> {
        match fs::read_to_string(self.table_path(table)) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites a table's dataset.
    pub fn save_rows(&self, table: &str, rows: &[Row]) -> Result<(), DbError> {
        let text = serde_json::to_string_pretty(rows)?;
        fs::write(self.table_path(table), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Column, DataType, ID_COLUMN, Value};
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_load_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        assert!(storage.load_schema().unwrap().names().is_empty());
        assert!(storage.load_rows("users").unwrap().is_empty());
    }

    #[test]
    fn test_schema_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();

        let mut catalog = Catalog::new();
        catalog
            .create("users", vec![
                Column::new(ID_COLUMN, DataType::Int),
                Column::new("name", DataType::String),
            ])
            .unwrap();
        storage.save_schema(&catalog).unwrap();

        let loaded = storage.load_schema().unwrap();
        assert_eq!(loaded.names(), vec!["users".to_string()]);
        assert_eq!(loaded.get("users").unwrap().len(), 2);
        assert_eq!(loaded.get("users").unwrap()[1].data_type, DataType::String);
    }

    #[test]
    fn test_rows_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();

        let mut row = Row::new();
        row.set(ID_COLUMN, Value::Int(1));
        row.set("name", Value::Str("Alice".into()));
        row.set("active", Value::Bool(true));
        storage.save_rows("users", &[row.clone()]).unwrap();

        let loaded = storage.load_rows("users").unwrap();
        assert_eq!(loaded, vec![row]);
    }

    #[test]
    fn test_save_rows_overwrites() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();

        let mut row = Row::new();
        row.set(ID_COLUMN, Value::Int(1));
        storage.save_rows("users", &[row]).unwrap();
        storage.save_rows("users", &[]).unwrap();
        assert!(storage.load_rows("users").unwrap().is_empty());
    }
}
