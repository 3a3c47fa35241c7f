//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open a to-do store file and print its items.
//! - Verify `todo_core` linkage without any outer application layer.
//!
//! Usage: `todo_cli [db_path] [log_dir]`

use std::process::ExitCode;
use todo_core::{ToDo, ToDoRepository, DEFAULT_DB_FILE_NAME};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let db_path = args
        .next()
        .unwrap_or_else(|| DEFAULT_DB_FILE_NAME.to_string());

    if let Some(log_dir) = args.next() {
        if let Err(err) = todo_core::init_logging(todo_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("todo_core version={}", todo_core::core_version());

    let items = match ToDo::new(&db_path).and_then(|store| store.get_all_items()) {
        Ok(items) => items,
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{db_path}: {} item(s)", items.len());
    for item in &items {
        println!("{item}");
    }
    ExitCode::SUCCESS
}
