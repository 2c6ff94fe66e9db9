use thiserror::Error;

use super::data_type::DataType;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Table '{0}' already exists")]
    TableExists(String),
    #[error("Table '{0}' not found")]
    TableNotFound(String),
    #[error("Column '{0}' not found")]
    UnknownColumn(String),
    #[error("Column name '{0}' is reserved")]
    ReservedColumn(String),
    #[error("Invalid column type '{0}'")]
    InvalidType(String),
    #[error("Expected {expected} values, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("Expected {expected} for column '{column}'")]
    TypeMismatch { column: String, expected: DataType },
    #[error("Malformed column definition: {0}")]
    MalformedDefinition(String),
    #[error("Malformed where clause: expected <column> = <value>")]
    MalformedPredicate,
    #[error("Malformed set clause: {0}")]
    MalformedAssignment(String),
    #[error("Unrecognized command: {0}")]
    UnknownCommand(String),
    #[error("Malformed command: {0}")]
    MalformedCommand(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
