use quicktodo_core::{MemorySlot, StoreError, TodoPatch, TodoStore, TodoValidationError};
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;
use uuid::Uuid;

fn ready_store() -> TodoStore<MemorySlot> {
    let mut store = TodoStore::new(MemorySlot::new());
    store.initialize().unwrap();
    store
}

#[test]
fn create_then_get_by_id_roundtrip() {
    let mut store = ready_store();

    let created = store.create("Buy milk", Some("2%")).unwrap();

    let fetched = store.get_by_id(created.id).unwrap();
    assert_eq!(fetched.title, "Buy milk");
    assert_eq!(fetched.description.as_deref(), Some("2%"));
    assert!(!fetched.completed);
    assert_eq!(fetched.created_at, fetched.updated_at);
    assert_eq!(fetched, &created);
}

#[test]
fn create_trims_input_and_rejects_blank_title() {
    let mut store = ready_store();

    let created = store.create("  tidy desk  ", Some("   ")).unwrap();
    assert_eq!(created.title, "tidy desk");
    assert_eq!(created.description, None);

    let err = store.create("   ", None).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TodoValidationError::EmptyTitle)
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn toggle_flips_completion_and_advances_updated_at() {
    let mut store = ready_store();
    let created = store.create("water plants", None).unwrap();

    sleep(Duration::from_millis(5));
    let toggled = store.toggle(created.id).unwrap();
    assert!(toggled.completed);
    assert!(toggled.updated_at > created.updated_at);
    assert_eq!(toggled.created_at, created.created_at);

    sleep(Duration::from_millis(5));
    let toggled_back = store.toggle(created.id).unwrap();
    assert!(!toggled_back.completed);
    assert!(toggled_back.updated_at > toggled.updated_at);
}

#[test]
fn update_applies_only_present_fields() {
    let mut store = ready_store();
    let created = store.create("draft email", Some("to the team")).unwrap();

    let patch = TodoPatch {
        title: Some("send email".to_string()),
        ..TodoPatch::default()
    };
    let updated = store.update(created.id, &patch).unwrap();

    assert_eq!(updated.title, "send email");
    assert_eq!(updated.description.as_deref(), Some("to the team"));
    assert!(!updated.completed);
}

#[test]
fn update_with_blank_title_leaves_record_untouched() {
    let mut store = ready_store();
    let created = store.create("keep me", Some("intact")).unwrap();

    let patch = TodoPatch {
        title: Some("   ".to_string()),
        description: Some("should not land".to_string()),
        completed: Some(true),
    };
    let err = store.update(created.id, &patch).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TodoValidationError::EmptyTitle)
    ));

    let fetched = store.get_by_id(created.id).unwrap();
    assert_eq!(fetched.title, "keep me");
    assert_eq!(fetched.description.as_deref(), Some("intact"));
    assert!(!fetched.completed);
    assert_eq!(fetched.updated_at, created.updated_at);
}

#[test]
fn update_with_blank_description_clears_it() {
    let mut store = ready_store();
    let created = store.create("trim hedge", Some("front garden")).unwrap();

    let patch = TodoPatch {
        description: Some("  ".to_string()),
        ..TodoPatch::default()
    };
    let updated = store.update(created.id, &patch).unwrap();
    assert_eq!(updated.description, None);
}

#[test]
fn update_and_toggle_signal_not_found_for_unknown_id() {
    let mut store = ready_store();
    store.create("only one", None).unwrap();
    let unknown = Uuid::new_v4();

    let update_err = store
        .update(unknown, &TodoPatch::default())
        .unwrap_err();
    assert!(matches!(update_err, StoreError::NotFound(id) if id == unknown));

    let toggle_err = store.toggle(unknown).unwrap_err();
    assert!(matches!(toggle_err, StoreError::NotFound(id) if id == unknown));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_returns_whether_a_record_was_removed() {
    let mut store = ready_store();
    let keep = store.create("keep", None).unwrap();
    let remove = store.create("remove", None).unwrap();

    assert!(store.delete(remove.id));
    assert_eq!(store.len(), 1);
    assert!(store.get_by_id(keep.id).is_some());

    let before: Vec<_> = store.todos().to_vec();
    assert!(!store.delete(Uuid::new_v4()));
    assert_eq!(store.todos(), before.as_slice());
}

#[test]
fn clear_completed_keeps_active_records_in_order() {
    let mut store = ready_store();
    let a = store.create("a", None).unwrap();
    let b = store.create("b", None).unwrap();
    let c = store.create("c", None).unwrap();
    let d = store.create("d", None).unwrap();
    let e = store.create("e", None).unwrap();
    store.toggle(b.id).unwrap();
    store.toggle(d.id).unwrap();

    store.clear_completed();

    let remaining: Vec<_> = store.todos().iter().map(|todo| todo.id).collect();
    assert_eq!(remaining, vec![a.id, c.id, e.id]);
    assert!(store.todos().iter().all(|todo| !todo.completed));
}

#[test]
fn ids_stay_unique_across_operation_sequences() {
    let mut store = ready_store();

    let mut ids = Vec::new();
    for index in 0..10 {
        ids.push(store.create(&format!("task {index}"), None).unwrap().id);
    }
    store.toggle(ids[2]).unwrap();
    store.toggle(ids[7]).unwrap();
    store.delete(ids[0]);
    store.clear_completed();
    for index in 0..5 {
        store.create(&format!("second wave {index}"), None).unwrap();
    }

    let unique: HashSet<_> = store.todos().iter().map(|todo| todo.id).collect();
    assert_eq!(unique.len(), store.len());
}

#[test]
fn collection_preserves_insertion_order() {
    let mut store = ready_store();
    store.create("first", None).unwrap();
    store.create("second", None).unwrap();
    store.create("third", None).unwrap();

    let titles: Vec<&str> = store
        .todos()
        .iter()
        .map(|todo| todo.title.as_str())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}
