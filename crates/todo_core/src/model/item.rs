//! To-do item model.
//!
//! # Responsibility
//! - Define the single record type stored in the backing file.
//! - Parse items supplied as inline JSON by callers.
//!
//! # Invariants
//! - Serialized field names are `Id`, `Title` and `IsDone`.
//! - `id` uniqueness is enforced by the store, not by this type.

use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a to-do item; unique within one store.
pub type ToDoId = i64;

/// A single to-do record.
///
/// Lower-case aliases are accepted on read so hand-edited files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    #[serde(rename = "Id", alias = "id")]
    pub id: ToDoId,
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "IsDone", alias = "done", alias = "is_done")]
    pub is_done: bool,
}

impl ToDoItem {
    pub fn new(id: ToDoId, title: impl Into<String>, is_done: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_done,
        }
    }

    /// Parses one item from a JSON object string.
    ///
    /// # Errors
    /// - Returns `StoreError::Malformed` when the text is not a valid item object.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(|source| StoreError::Malformed { path: None, source })
    }
}

impl Display for ToDoItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mark = if self.is_done { 'x' } else { ' ' };
        write!(f, "[{mark}] {}: {}", self.id, self.title)
    }
}
