//! Built-in sample dataset written by `restore_db`.

use crate::model::item::ToDoItem;

/// Returns the default seed items, ordered by ID.
pub fn seed_items() -> Vec<ToDoItem> {
    vec![
        ToDoItem::new(1, "Learn Go / GoLang", false),
        ToDoItem::new(2, "Learn Rust", false),
        ToDoItem::new(3, "Write a to-do list store", true),
        ToDoItem::new(4, "Add tests for the store", false),
    ]
}
