//! JSON file implementation of `ToDoRepository`.
//!
//! # Responsibility
//! - Load the backing JSON array into an ordered in-memory map.
//! - Rewrite the whole file after every successful mutation.
//!
//! # Invariants
//! - Mutations are staged on a copy; the live map only changes after the
//!   staged copy has been written, so memory never runs ahead of the file.
//! - Logs carry IDs and counts only, never item titles.

use super::seed::seed_items;
use super::{LookupAction, StoreError, StoreResult, ToDoRepository};
use crate::model::item::{ToDoId, ToDoItem};
use log::{debug, error, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

type ItemMap = BTreeMap<ToDoId, ToDoItem>;

/// To-do store synchronized to a single JSON file.
#[derive(Debug)]
pub struct ToDo {
    path: PathBuf,
    items: ItemMap,
    seed: ItemMap,
}

impl ToDo {
    /// Opens the store at `path`, using the built-in seed for `restore_db`.
    ///
    /// # Side effects
    /// - Creates the file containing `[]` when it does not exist yet.
    ///
    /// # Errors
    /// - `StoreErrorKind::Io` when the file cannot be read or created, holds
    ///   malformed JSON, or repeats an ID.
    pub fn new(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::with_seed(path, seed_items())
    }

    /// Opens the store at `path` with a caller-provided seed dataset.
    ///
    /// # Errors
    /// - Same as [`ToDo::new`].
    /// - `StoreError::DuplicateKey` when `seed` repeats an ID.
    pub fn with_seed(path: impl AsRef<Path>, seed: Vec<ToDoItem>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let seed = index_items(seed).map_err(StoreError::DuplicateKey)?;

        let started_at = Instant::now();
        info!("event=todo_load module=store status=start");
        match load_items(&path) {
            Ok(items) => {
                info!(
                    "event=todo_load module=store status=ok count={} duration_ms={}",
                    items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Self { path, items, seed })
            }
            Err(err) => {
                error!(
                    "event=todo_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn lookup(&self, id: ToDoId, action: LookupAction) -> StoreResult<&ToDoItem> {
        self.items.get(&id).ok_or_else(|| {
            debug!(
                "event=todo_lookup module=store status=miss id={id} action={}",
                action.verb()
            );
            StoreError::NotFound { id, action }
        })
    }

    /// Persists `staged` and makes it the live collection.
    fn commit(&mut self, event: &str, id: Option<ToDoId>, staged: ItemMap) -> StoreResult<()> {
        let started_at = Instant::now();
        let id_field = id.map_or_else(|| "-".to_string(), |id| id.to_string());

        match write_items(&self.path, &staged) {
            Ok(()) => {
                self.items = staged;
                info!(
                    "event={event} module=store status=ok id={id_field} count={} duration_ms={}",
                    self.items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event={event} module=store status=error id={id_field} duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl ToDoRepository for ToDo {
    fn add_item(&mut self, item: ToDoItem) -> StoreResult<()> {
        if self.items.contains_key(&item.id) {
            warn!(
                "event=todo_add module=store status=rejected id={} error_code=duplicate_key",
                item.id
            );
            return Err(StoreError::DuplicateKey(item.id));
        }

        let id = item.id;
        let mut staged = self.items.clone();
        staged.insert(id, item);
        self.commit("todo_add", Some(id), staged)
    }

    fn get_item(&self, id: ToDoId) -> StoreResult<ToDoItem> {
        self.lookup(id, LookupAction::Fetch).cloned()
    }

    fn update_item(&mut self, item: ToDoItem) -> StoreResult<()> {
        self.lookup(item.id, LookupAction::Update)?;

        let id = item.id;
        let mut staged = self.items.clone();
        staged.insert(id, item);
        self.commit("todo_update", Some(id), staged)
    }

    fn delete_item(&mut self, id: ToDoId) -> StoreResult<()> {
        self.lookup(id, LookupAction::Delete)?;

        let mut staged = self.items.clone();
        staged.remove(&id);
        self.commit("todo_delete", Some(id), staged)
    }

    fn get_all_items(&self) -> StoreResult<Vec<ToDoItem>> {
        Ok(self.items.values().cloned().collect())
    }

    fn change_item_done_status(&mut self, id: ToDoId, is_done: bool) -> StoreResult<()> {
        let mut item = self.lookup(id, LookupAction::Update)?.clone();
        item.is_done = is_done;

        let mut staged = self.items.clone();
        staged.insert(id, item);
        self.commit("todo_change_status", Some(id), staged)
    }

    fn restore_db(&mut self) -> StoreResult<()> {
        let staged = self.seed.clone();
        self.commit("todo_restore", None, staged)
    }
}

fn load_items(path: &Path) -> StoreResult<ItemMap> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let empty = ItemMap::new();
            write_items(path, &empty)?;
            return Ok(empty);
        }
        Err(err) => return Err(StoreError::io(path, err)),
    };

    if text.trim().is_empty() {
        return Ok(ItemMap::new());
    }

    let items: Vec<ToDoItem> =
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: Some(path.to_path_buf()),
            source,
        })?;

    index_items(items).map_err(|id| StoreError::DuplicateIdInFile {
        path: path.to_path_buf(),
        id,
    })
}

fn write_items(path: &Path, items: &ItemMap) -> StoreResult<()> {
    let list: Vec<&ToDoItem> = items.values().collect();
    let mut json = serde_json::to_string_pretty(&list).map_err(|source| StoreError::Malformed {
        path: Some(path.to_path_buf()),
        source,
    })?;
    json.push('\n');

    fs::write(path, json).map_err(|err| StoreError::io(path, err))
}

/// Builds an ID-keyed map, returning the first repeated ID on conflict.
fn index_items(items: Vec<ToDoItem>) -> Result<ItemMap, ToDoId> {
    let mut map = ItemMap::new();
    for item in items {
        let id = item.id;
        if map.insert(id, item).is_some() {
            return Err(id);
        }
    }
    Ok(map)
}
