// Module declarations
pub mod cache;
pub mod ddl;
pub mod dml;
pub mod queries;

pub use cache::ResultCache;
pub use ddl::DdlExecutor;
pub use dml::DmlExecutor;
pub use queries::QueryExecutor;

use crate::core::{Catalog, Column, DbError, Row};
use crate::parser::Command;
use crate::storage::Storage;

/// Outcome of one executed command, ready for rendering by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Success(String),
    Tables(Vec<String>),
    Rows {
        columns: Vec<Column>,
        rows: Vec<Row>,
    },
    Info {
        table: String,
        columns: Vec<Column>,
        count: usize,
    },
}

/// Maps parsed commands to engine calls.
///
/// Owns the storage handle and the session's result cache. Catalog
/// mutations are persisted here, immediately after the engine call, so
/// the in-memory schema and the metadata file never diverge.
pub struct Executor {
    storage: Storage,
    cache: ResultCache,
}

impl Executor {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            cache: ResultCache::new(),
        }
    }

    pub fn execute(
        &mut self,
        catalog: &mut Catalog,
        command: Command,
    ) -> Result<QueryResult, DbError> {
        match command {
            Command::CreateTable { name, columns } => {
                let cols = DdlExecutor::create_table(catalog, &name, &columns)?;
                self.storage.save_schema(catalog)?;
                let described: Vec<String> = cols.iter().map(ToString::to_string).collect();
                Ok(QueryResult::Success(format!(
                    "Table '{}' created with columns: {}",
                    name,
                    described.join(", ")
                )))
            }
            Command::ListTables => Ok(QueryResult::Tables(DdlExecutor::list_tables(catalog))),
            Command::DropTable { name } => {
                DdlExecutor::drop_table(catalog, &mut self.cache, &self.storage, &name)?;
                self.storage.save_schema(catalog)?;
                Ok(QueryResult::Success(format!("Table '{name}' dropped")))
            }
            Command::Insert { table, values } => {
                DmlExecutor::insert(catalog, &mut self.cache, &self.storage, &table, values)?;
                Ok(QueryResult::Success(format!(
                    "1 row inserted into '{table}'"
                )))
            }
            Command::Select { table, filter } => {
                let rows = QueryExecutor::select(
                    catalog,
                    &mut self.cache,
                    &self.storage,
                    &table,
                    filter.as_ref(),
                )?;
                let columns = catalog.columns(&table)?.to_vec();
                Ok(QueryResult::Rows { columns, rows })
            }
            Command::Update {
                table,
                assignments,
                filter,
            } => {
                let (_, updated) = DmlExecutor::update(
                    catalog,
                    &mut self.cache,
                    &self.storage,
                    &table,
                    &assignments,
                    &filter,
                )?;
                Ok(QueryResult::Success(format!("{updated} row(s) updated")))
            }
            Command::Delete { table, filter } => {
                let (_, removed) =
                    DmlExecutor::delete(catalog, &mut self.cache, &self.storage, &table, &filter)?;
                Ok(QueryResult::Success(format!("{removed} row(s) deleted")))
            }
            Command::Info { table } => {
                let (columns, count) = DdlExecutor::info(catalog, &self.storage, &table)?;
                Ok(QueryResult::Info {
                    table,
                    columns,
                    count,
                })
            }
        }
    }
}
