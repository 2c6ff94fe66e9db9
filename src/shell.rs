//! Interactive read loop: rustyline editing and history, comfy-table
//! rendering, y/n confirmation before destructive commands, and
//! elapsed-time reporting for insert/select.
//!
//! All prompting lives here. The engine's drop/delete are unconditional;
//! confirmation happens before the executor is ever called.

use std::time::Instant;

use comfy_table::{Cell, Table as ComfyTable, presets::UTF8_FULL};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::Catalog;
use crate::engine::{Executor, QueryResult};
use crate::parser::{Command, parse_command};

const PROMPT: &str = "db> ";

const HELP: &str = "\
Commands:
  create_table <name> <col:type> [<col:type> ...]   create a table (types: int, string, bool)
  list_tables                                       list all tables
  drop_table <name>                                 drop a table
  insert into <name> values (<v1>, <v2>, ...)       insert a row
  select from <name> [where <col> = <value>]        query rows
  update <name> set <col>=<value>[, ...] where <col> = <value>
  delete from <name> where <col> = <value>          delete matching rows
  info <name>                                       show columns and row count
  help                                              show this message
  exit                                              quit";

fn history_path() -> Option<std::path::PathBuf> {
    dirs::data_dir().map(|d| d.join("minidb_history"))
}

/// Which commands need a y/n confirmation before they run.
fn destructive_action(command: &Command) -> Option<&'static str> {
    match command {
        Command::DropTable { .. } => Some("drop the table"),
        Command::Delete { .. } => Some("delete matching rows"),
        _ => None,
    }
}

/// Operations whose elapsed time gets reported after execution.
fn timed_operation(command: &Command) -> Option<&'static str> {
    match command {
        Command::Insert { .. } => Some("insert"),
        Command::Select { .. } => Some("select"),
        _ => None,
    }
}

fn render(result: &QueryResult) {
    match result {
        QueryResult::Success(message) => println!("{message}"),
        QueryResult::Tables(names) => {
            if names.is_empty() {
                println!("No tables.");
            } else {
                for name in names {
                    println!("- {name}");
                }
            }
        }
        QueryResult::Rows { columns, rows } => {
            let mut table = ComfyTable::new();
            table.load_preset(UTF8_FULL);
            table.set_header(columns.iter().map(|c| Cell::new(&c.name)));
            for row in rows {
                table.add_row(columns.iter().map(|c| {
                    Cell::new(row.get(&c.name).map(ToString::to_string).unwrap_or_default())
                }));
            }
            println!("{table}");
            println!("({} rows)", rows.len());
        }
        QueryResult::Info {
            table,
            columns,
            count,
        } => {
            let described: Vec<String> = columns.iter().map(ToString::to_string).collect();
            println!("Table: {table}");
            println!("Columns: {}", described.join(", "));
            println!("Row count: {count}");
        }
    }
}

/// Runs the session until `exit` or end of input. Errors from individual
/// commands are printed and the loop continues; only readline failures
/// and history I/O escape.
pub fn run(
    mut executor: Executor,
    mut catalog: Catalog,
    confirm: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl = DefaultEditor::new()?;
    let history = history_path();
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    println!("minidb is running. Type 'help' for the command list.");
    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        let head = line.split_whitespace().next().unwrap_or_default();
        if head.eq_ignore_ascii_case("help") {
            println!("{HELP}");
            continue;
        }
        if head.eq_ignore_ascii_case("exit") {
            break;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                println!("Error: {e}");
                continue;
            }
        };

        if confirm {
            if let Some(action) = destructive_action(&command) {
                let answer = rl
                    .readline(&format!("Are you sure you want to {action}? [y/N]: "))
                    .unwrap_or_default();
                if !answer.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    continue;
                }
            }
        }

        let timed = timed_operation(&command);
        let started = Instant::now();
        match executor.execute(&mut catalog, command) {
            Ok(result) => {
                render(&result);
                if let Some(op) = timed {
                    println!("{op} completed in {:.3}s", started.elapsed().as_secs_f64());
                }
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    if let Some(path) = &history {
        let _ = rl.save_history(path);
    }
    println!("Bye.");
    Ok(())
}
