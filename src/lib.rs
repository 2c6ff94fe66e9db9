// minidb - minimal schema-enforcing record store driven by a textual
// command language. Pipeline: tokenize -> parse clauses -> execute
// against the catalog, with JSON file persistence and a per-table
// memoization cache for reads.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

// Core data model: values, types, columns, rows, catalog, errors
pub mod core;

// Command tokenizer and clause parsers
pub mod parser;

// Record engine: DDL, DML, reads, result cache, dispatcher
pub mod engine;

// JSON file persistence for the catalog and table datasets
pub mod storage;

// Interactive shell (rustyline loop, rendering, confirmations)
pub mod shell;

// Re-export commonly used types for convenience
pub use self::core::{Catalog, Column, DataType, DbError, Row, Value};
pub use engine::{Executor, QueryResult};
pub use parser::{Command, parse_command};
pub use storage::Storage;
