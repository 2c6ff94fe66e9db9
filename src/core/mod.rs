// Module declarations
pub mod catalog;
pub mod column;
pub mod data_type;
pub mod error;
pub mod row;
pub mod value;

// Re-exports for convenience
pub use catalog::Catalog;
pub use column::Column;
pub use data_type::DataType;
pub use error::DbError;
pub use row::{Row, ID_COLUMN};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Str("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_value_data_type() {
        assert_eq!(Value::Int(1).data_type(), DataType::Int);
        assert_eq!(Value::Str(String::new()).data_type(), DataType::String);
        assert_eq!(Value::Bool(false).data_type(), DataType::Bool);
    }

    #[test]
    fn test_data_type_parse() {
        assert_eq!(DataType::parse("int"), Some(DataType::Int));
        assert_eq!(DataType::parse("STRING"), Some(DataType::String));
        assert_eq!(DataType::parse("Bool"), Some(DataType::Bool));
        assert_eq!(DataType::parse("float"), None);
    }

    #[test]
    fn test_value_json_round_trip() {
        // Persisted rows are plain JSON scalars
        assert_eq!(serde_json::to_string(&Value::Int(30)).unwrap(), "30");
        assert_eq!(
            serde_json::to_string(&Value::Str("Alice".into())).unwrap(),
            "\"Alice\""
        );
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");

        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));
        let v: Value = serde_json::from_str("30").unwrap();
        assert_eq!(v, Value::Int(30));
        let v: Value = serde_json::from_str("\"true\"").unwrap();
        assert_eq!(v, Value::Str("true".into()));
    }

    #[test]
    fn test_catalog_create_and_drop() {
        let mut catalog = Catalog::new();
        let cols = vec![Column::new(ID_COLUMN, DataType::Int)];
        catalog.create("users", cols.clone()).unwrap();
        assert!(matches!(
            catalog.create("users", cols),
            Err(DbError::TableExists(_))
        ));
        assert_eq!(catalog.names(), vec!["users".to_string()]);
        catalog.drop("users").unwrap();
        assert!(matches!(
            catalog.drop("users"),
            Err(DbError::TableNotFound(_))
        ));
    }

    #[test]
    fn test_row_id_defaults_to_zero() {
        let row = Row::new();
        assert_eq!(row.id(), 0);
        let mut row = Row::new();
        row.set(ID_COLUMN, Value::Int(7));
        assert_eq!(row.id(), 7);
    }
}
