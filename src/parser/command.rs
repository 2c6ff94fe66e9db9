use crate::core::{DbError, Value};

use super::clauses::{Assignments, Predicate, parse_columns, parse_set, parse_values, parse_where};
use super::tokenizer::split_command;

/// A fully parsed command, ready for the executor. Keywords in the
/// surface syntax are case-insensitive; table and column names are not.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateTable {
        name: String,
        columns: Vec<(String, String)>,
    },
    ListTables,
    DropTable {
        name: String,
    },
    Insert {
        table: String,
        values: Vec<Value>,
    },
    Select {
        table: String,
        filter: Option<Predicate>,
    },
    Update {
        table: String,
        assignments: Assignments,
        filter: Predicate,
    },
    Delete {
        table: String,
        filter: Predicate,
    },
    Info {
        table: String,
    },
}

/// ASCII case-insensitive substring search, used to slice the raw line
/// after the `values` keyword without disturbing quoted content.
fn find_keyword(line: &str, keyword: &str) -> Option<usize> {
    line.as_bytes()
        .windows(keyword.len())
        .position(|w| w.eq_ignore_ascii_case(keyword.as_bytes()))
}

fn keyword_position(tokens: &[String], keyword: &str) -> Option<usize> {
    tokens.iter().position(|t| t.eq_ignore_ascii_case(keyword))
}

/// Parses one raw command line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, DbError> {
    let line = line.trim();
    let tokens = split_command(line);
    let Some(head) = tokens.first() else {
        return Err(DbError::UnknownCommand(String::new()));
    };

    match head.to_ascii_lowercase().as_str() {
        "create_table" => {
            if tokens.len() < 3 {
                return Err(DbError::MalformedCommand(
                    "create_table <name> <col:type> [<col:type> ...]".to_string(),
                ));
            }
            Ok(Command::CreateTable {
                name: tokens[1].clone(),
                columns: parse_columns(&tokens[2..])?,
            })
        }
        "list_tables" => Ok(Command::ListTables),
        "drop_table" => {
            if tokens.len() != 2 {
                return Err(DbError::MalformedCommand(
                    "drop_table <name>".to_string(),
                ));
            }
            Ok(Command::DropTable {
                name: tokens[1].clone(),
            })
        }
        "insert" => {
            if tokens.len() < 4 || !tokens[1].eq_ignore_ascii_case("into") {
                return Err(DbError::MalformedCommand(
                    "insert into <name> values (<v1>, <v2>, ...)".to_string(),
                ));
            }
            // Values come from the raw line, not the tokens, so quoting
            // inside the literal list survives for the clause parser.
            let values_at = find_keyword(line, "values").ok_or_else(|| {
                DbError::MalformedCommand("insert requires a values list".to_string())
            })?;
            let rest = &line[values_at + "values".len()..];
            Ok(Command::Insert {
                table: tokens[2].clone(),
                values: parse_values(rest),
            })
        }
        "select" => {
            if tokens.len() < 3 || !tokens[1].eq_ignore_ascii_case("from") {
                return Err(DbError::MalformedCommand(
                    "select from <name> [where <col> = <value>]".to_string(),
                ));
            }
            let filter = match keyword_position(&tokens, "where") {
                Some(idx) => Some(parse_where(&tokens[idx + 1..])?),
                None => None,
            };
            Ok(Command::Select {
                table: tokens[2].clone(),
                filter,
            })
        }
        "update" => {
            let set_idx = keyword_position(&tokens, "set");
            let where_idx = keyword_position(&tokens, "where");
            let (Some(set_idx), Some(where_idx)) = (set_idx, where_idx) else {
                return Err(DbError::MalformedCommand(
                    "update <name> set <col>=<value>[, ...] where <col> = <value>".to_string(),
                ));
            };
            if tokens.len() < 2 || set_idx != 2 || where_idx <= set_idx {
                return Err(DbError::MalformedCommand(
                    "update <name> set <col>=<value>[, ...] where <col> = <value>".to_string(),
                ));
            }
            Ok(Command::Update {
                table: tokens[1].clone(),
                assignments: parse_set(&tokens[set_idx + 1..where_idx])?,
                filter: parse_where(&tokens[where_idx + 1..])?,
            })
        }
        "delete" => {
            if tokens.len() < 3 || !tokens[1].eq_ignore_ascii_case("from") {
                return Err(DbError::MalformedCommand(
                    "delete from <name> where <col> = <value>".to_string(),
                ));
            }
            let where_idx = keyword_position(&tokens, "where").ok_or_else(|| {
                DbError::MalformedCommand("delete requires a where clause".to_string())
            })?;
            Ok(Command::Delete {
                table: tokens[2].clone(),
                filter: parse_where(&tokens[where_idx + 1..])?,
            })
        }
        "info" => {
            if tokens.len() != 2 {
                return Err(DbError::MalformedCommand("info <name>".to_string()));
            }
            Ok(Command::Info {
                table: tokens[1].clone(),
            })
        }
        other => Err(DbError::UnknownCommand(other.to_string())),
    }
}
