use std::collections::BTreeMap;

use crate::core::{DbError, Value};

/// Conjunction of column-equals-literal conditions. A row matches when
/// every entry equals the row's value exactly, in both type and value.
pub type Predicate = BTreeMap<String, Value>;

/// Column -> new literal, applied to rows matching an update's predicate.
pub type Assignments = BTreeMap<String, Value>;

/// Turns `name:type` tokens into ordered (name, type) pairs.
///
/// Type membership is not validated here; the record engine checks the
/// label against the type set at table-creation time.
pub fn parse_columns(tokens: &[String]) -> Result<Vec<(String, String)>, DbError> {
    let mut columns = Vec::with_capacity(tokens.len());
    for token in tokens {
        let (name, data_type) = token
            .split_once(':')
            .ok_or_else(|| DbError::MalformedDefinition(token.clone()))?;
        columns.push((name.to_string(), data_type.to_string()));
    }
    Ok(columns)
}

/// Parses the exact 3-token pattern `<column> = <value>`.
pub fn parse_where(tokens: &[String]) -> Result<Predicate, DbError> {
    let [column, eq, value] = tokens else {
        return Err(DbError::MalformedPredicate);
    };
    if eq != "=" {
        return Err(DbError::MalformedPredicate);
    }
    let mut predicate = Predicate::new();
    predicate.insert(column.clone(), parse_value_token(value));
    Ok(predicate)
}

/// Parses an update's set clause: comma-separated `column = value`
/// fragments, each of which must contain `=`.
pub fn parse_set(tokens: &[String]) -> Result<Assignments, DbError> {
    let joined = tokens.join(" ");
    let mut assignments = Assignments::new();
    for fragment in joined.split(',') {
        let (column, value) = fragment
            .split_once('=')
            .ok_or_else(|| DbError::MalformedAssignment(fragment.trim().to_string()))?;
        assignments.insert(
            column.trim().to_string(),
            parse_value_token(value.trim()),
        );
    }
    Ok(assignments)
}

/// Parses a literal list like `("Alice", 30, true)` into typed values.
///
/// Strips one optional enclosing parenthesis pair, then splits on commas
/// that are not inside a quoted span.
#[must_use]
pub fn parse_values(text: &str) -> Vec<Value> {
    let mut s = text.trim();
    if s.starts_with('(') && s.ends_with(')') && s.len() >= 2 {
        s = &s[1..s.len() - 1];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut quote_char: Option<char> = None;
    for ch in s.chars() {
        match ch {
            '"' | '\'' => {
                match quote_char {
                    None => quote_char = Some(ch),
                    Some(open) if open == ch => quote_char = None,
                    Some(_) => {}
                }
                current.push(ch);
            }
            ',' if quote_char.is_none() => {
                pieces.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        pieces.push(current.trim().to_string());
    }

    pieces.iter().map(|p| parse_value_token(p)).collect()
}

/// Types a single literal token. Tie-break order, preserved exactly:
/// quoted string -> boolean keyword -> integer -> fallback string.
#[must_use]
pub fn parse_value_token(token: &str) -> Value {
    let t = token.trim();
    if t.len() >= 2 {
        let quoted = (t.starts_with('"') && t.ends_with('"'))
            || (t.starts_with('\'') && t.ends_with('\''));
        if quoted {
            return Value::Str(t[1..t.len() - 1].to_string());
        }
    }
    if t.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if t.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = t.parse::<i64>() {
        return Value::Int(i);
    }
    Value::Str(t.to_string())
}
