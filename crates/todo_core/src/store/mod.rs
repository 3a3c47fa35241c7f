//! File-backed to-do storage.
//!
//! # Responsibility
//! - Define the data access contract for to-do items.
//! - Keep JSON file details inside the store boundary.
//!
//! # Invariants
//! - Item IDs are unique across the store at all times.
//! - Every successful mutation rewrites the whole backing file.
//! - Store APIs return semantic errors (`NotFound`, `DuplicateKey`) in
//!   addition to file transport errors.

use crate::model::item::{ToDoId, ToDoItem};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod json_store;
pub mod seed;

pub use json_store::ToDo;

/// Backing file used when callers do not supply a path.
pub const DEFAULT_DB_FILE_NAME: &str = "data/todo.json";

pub type StoreResult<T> = Result<T, StoreError>;

/// Operation that looked up an item which turned out to be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupAction {
    Fetch,
    Update,
    Delete,
}

impl LookupAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Coarse error classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Backing file unreadable/unwritable, or its content is not valid.
    Io,
    NotFound,
    DuplicateKey,
}

/// Error for store construction, persistence and item operations.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    DuplicateIdInFile {
        path: PathBuf,
        id: ToDoId,
    },
    NotFound {
        id: ToDoId,
        action: LookupAction,
    },
    DuplicateKey(ToDoId),
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Io { .. } | Self::Malformed { .. } | Self::DuplicateIdInFile { .. } => {
                StoreErrorKind::Io
            }
            Self::NotFound { .. } => StoreErrorKind::NotFound,
            Self::DuplicateKey(_) => StoreErrorKind::DuplicateKey,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == StoreErrorKind::NotFound
    }

    /// Stable code used in log events.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_failed",
            Self::Malformed { .. } => "malformed_json",
            Self::DuplicateIdInFile { .. } => "duplicate_id_in_file",
            Self::NotFound { .. } => "not_found",
            Self::DuplicateKey(_) => "duplicate_key",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access todo file `{}`: {source}", path.display())
            }
            Self::Malformed {
                path: Some(path),
                source,
            } => write!(f, "malformed todo json in `{}`: {source}", path.display()),
            Self::Malformed { path: None, source } => write!(f, "malformed todo json: {source}"),
            Self::DuplicateIdInFile { path, id } => write!(
                f,
                "todo file `{}` contains id {id} more than once",
                path.display()
            ),
            Self::NotFound { action, .. } => {
                write!(f, "todo trying to {} doesnt exists", action.verb())
            }
            Self::DuplicateKey(_) => write!(f, "todo item already exists"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::DuplicateIdInFile { .. } | Self::NotFound { .. } | Self::DuplicateKey(_) => None,
        }
    }
}

/// Data access contract for to-do items.
pub trait ToDoRepository {
    /// Inserts a new item; rejects an ID that is already stored.
    fn add_item(&mut self, item: ToDoItem) -> StoreResult<()>;
    /// Returns a copy of the item with `id`.
    fn get_item(&self, id: ToDoId) -> StoreResult<ToDoItem>;
    /// Replaces every field of the stored item with the same ID.
    fn update_item(&mut self, item: ToDoItem) -> StoreResult<()>;
    fn delete_item(&mut self, id: ToDoId) -> StoreResult<()>;
    /// Returns all items ordered by ascending ID.
    fn get_all_items(&self) -> StoreResult<Vec<ToDoItem>>;
    /// Sets only the done flag of an existing item.
    fn change_item_done_status(&mut self, id: ToDoId, is_done: bool) -> StoreResult<()>;
    /// Replaces the whole collection with the seed dataset.
    fn restore_db(&mut self) -> StoreResult<()>;
}
