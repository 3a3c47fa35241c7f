//! Core storage for the to-do list.
//! A small in-memory collection kept in sync with one JSON file.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ToDoId, ToDoItem};
pub use store::seed::seed_items;
pub use store::{
    LookupAction, StoreError, StoreErrorKind, StoreResult, ToDo, ToDoRepository,
    DEFAULT_DB_FILE_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
