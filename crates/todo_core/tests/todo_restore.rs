use rand::Rng;
use tempfile::TempDir;
use todo_core::{seed_items, StoreErrorKind, ToDo, ToDoItem, ToDoRepository};

#[test]
fn restore_discards_added_items() {
    let dir = TempDir::new().unwrap();
    let mut store = ToDo::new(dir.path().join("todo.json")).unwrap();
    store.restore_db().unwrap();
    let original = store.get_all_items().unwrap();

    let id = rand::thread_rng().gen_range(100..=110);
    store.add_item(ToDoItem::new(id, "temporary", true)).unwrap();
    store.restore_db().unwrap();

    let err = store.get_item(id).unwrap_err();
    assert_eq!(err.to_string(), "todo trying to fetch doesnt exists");

    let restored = store.get_all_items().unwrap();
    assert_eq!(restored.len(), original.len());
    for item in &original {
        assert_eq!(&store.get_item(item.id).unwrap(), item);
    }
}

#[test]
fn restore_undoes_updates_and_deletes() {
    let dir = TempDir::new().unwrap();
    let mut store = ToDo::new(dir.path().join("todo.json")).unwrap();
    store.restore_db().unwrap();
    let seed = seed_items();
    let first = seed[0].clone();

    store
        .update_item(ToDoItem::new(first.id, "rewritten", !first.is_done))
        .unwrap();
    store.delete_item(seed[1].id).unwrap();
    store.restore_db().unwrap();

    assert_eq!(store.get_all_items().unwrap(), seed);
}

#[test]
fn restore_length_matches_seed_from_empty_store() {
    let dir = TempDir::new().unwrap();
    let mut store = ToDo::new(dir.path().join("todo.json")).unwrap();
    assert!(store.is_empty());

    store.restore_db().unwrap();
    assert_eq!(store.len(), seed_items().len());
}

#[test]
fn custom_seed_is_used_by_restore() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo.json");
    let seed = vec![ToDoItem::new(10, "alpha", false), ToDoItem::new(20, "beta", true)];
    let mut store = ToDo::with_seed(&path, seed.clone()).unwrap();

    store.add_item(ToDoItem::new(30, "gamma", false)).unwrap();
    store.restore_db().unwrap();

    assert_eq!(store.get_all_items().unwrap(), seed);
    assert_eq!(
        store.get_item(30).unwrap_err().kind(),
        StoreErrorKind::NotFound
    );

    let reopened = ToDo::new(&path).unwrap();
    assert_eq!(reopened.get_all_items().unwrap(), seed);
}
