use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value::Value;

/// The synthetic primary-key column injected into every table.
pub const ID_COLUMN: &str = "ID";

/// One record: a mapping from column name to a typed scalar.
///
/// Serializes as a plain JSON object, so persisted table files read as
/// `[{"ID": 1, "name": "Alice", ...}, ...]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.fields.insert(column.into(), value);
    }

    /// The row's ID, or 0 when the field is missing or not an integer.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.get(ID_COLUMN).and_then(Value::as_int).unwrap_or(0)
    }
}
