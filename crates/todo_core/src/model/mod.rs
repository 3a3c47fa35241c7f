//! Domain model for to-do records.
//!
//! # Responsibility
//! - Define the record shape persisted by the JSON store.
//! - Own the on-disk field naming for that record.
//!
//! # Invariants
//! - Every record is identified by a caller-chosen `ToDoId`.

pub mod item;
