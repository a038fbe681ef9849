use quicktodo_core::{normalize_description, normalize_title, Todo, TodoValidationError};
use uuid::Uuid;

#[test]
fn new_sets_defaults() {
    let todo = Todo::new("buy milk", Some("2%")).unwrap();

    assert!(!todo.id.is_nil());
    assert_eq!(todo.title, "buy milk");
    assert_eq!(todo.description.as_deref(), Some("2%"));
    assert!(!todo.completed);
    assert_eq!(todo.created_at, todo.updated_at);
    assert!(todo.is_active());
}

#[test]
fn new_trims_title_and_description() {
    let todo = Todo::new("  call dentist  ", Some("  ask about Friday  ")).unwrap();

    assert_eq!(todo.title, "call dentist");
    assert_eq!(todo.description.as_deref(), Some("ask about Friday"));
}

#[test]
fn new_rejects_whitespace_only_title() {
    let err = Todo::new("   ", None).unwrap_err();
    assert_eq!(err, TodoValidationError::EmptyTitle);
}

#[test]
fn blank_description_becomes_absent() {
    let todo = Todo::new("walk dog", Some("   ")).unwrap();
    assert_eq!(todo.description, None);

    assert_eq!(normalize_description(None), None);
    assert_eq!(normalize_description(Some("  ")), None);
    assert_eq!(normalize_description(Some(" x ")).as_deref(), Some("x"));
}

#[test]
fn normalize_title_rejects_empty_input() {
    assert_eq!(
        normalize_title("").unwrap_err(),
        TodoValidationError::EmptyTitle
    );
    assert_eq!(normalize_title(" ship it ").unwrap(), "ship it");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let todo_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut todo = Todo::new("write report", Some("quarterly numbers")).unwrap();
    todo.id = todo_id;

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], todo_id.to_string());
    assert_eq!(json["title"], "write report");
    assert_eq!(json["description"], "quarterly numbers");
    assert_eq!(json["completed"], false);
    // Timestamps travel as ISO-8601 strings, not epoch numbers.
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
    assert!(json["createdAt"].as_str().unwrap().contains('T'));

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn absent_description_is_omitted_from_the_wire() {
    let todo = Todo::new("no details", None).unwrap();
    let json = serde_json::to_value(&todo).unwrap();
    assert!(json.get("description").is_none());

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.description, None);
}

#[test]
fn validate_rejects_reversed_timestamps() {
    let mut todo = Todo::new("time traveler", None).unwrap();
    todo.updated_at = todo.created_at - chrono::Duration::seconds(1);

    assert_eq!(
        todo.validate().unwrap_err(),
        TodoValidationError::UpdatedBeforeCreated
    );
}
