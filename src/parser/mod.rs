// Module declarations
mod clauses;
mod command;
mod tokenizer;

// Re-export the public parsing surface
pub use clauses::{
    Assignments, Predicate, parse_columns, parse_set, parse_value_token, parse_values, parse_where,
};
pub use command::{Command, parse_command};
pub use tokenizer::split_command;
