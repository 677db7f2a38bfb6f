mod common;

use catalog::{find_by_id, Customer, CustomerStatus, Lookup, Product, StoreError};
use common::*;
use serde_json::{json, Value};

fn john() -> Customer {
    Customer {
        id: "123".to_string(),
        name: "John Doe".to_string(),
        email: "test@mail.com".to_string(),
        status: CustomerStatus::Active,
    }
}

#[test]
fn test_found_returns_matching_record() {
    let store = store_from_values(vec![
        json!({"id": "1", "name": "Someone", "email": "a@mail.com", "status": "INACTIVE"}),
        json!({"id": "123", "name": "John Doe", "email": "test@mail.com", "status": "ACTIVE"}),
        json!({"id": "2", "name": "Else", "email": "b@mail.com", "status": "SUSPENDED"}),
    ]);

    let result: Lookup<Customer> = find_by_id(&store.path, "123").unwrap();

    assert_eq!(result, Lookup::Found(john()));
}

#[test]
fn test_found_record_is_isolated_from_store() {
    let store = store_from_records(&[john()]);

    let mut first = find_by_id::<Customer>(&store.path, "123")
        .unwrap()
        .into_option()
        .unwrap();
    first.name = "Mutated".to_string();
    first.status = CustomerStatus::Suspended;

    let second = find_by_id::<Customer>(&store.path, "123")
        .unwrap()
        .into_option()
        .unwrap();
    assert_eq!(second, john());
}

#[test]
fn test_not_found_is_not_an_error() {
    let store = store_from_records(&[john()]);

    let result = find_by_id::<Customer>(&store.path, "999");

    assert!(matches!(result, Ok(Lookup::NotFound)));
}

#[test]
fn test_first_match_wins() {
    let store = store_from_values(vec![
        json!({"id": "42", "name": "first"}),
        json!({"id": "7", "name": "other"}),
        json!({"id": "8", "name": "other"}),
        json!({"id": "42", "name": "fourth"}),
    ]);

    let product = find_by_id::<Product>(&store.path, "42")
        .unwrap()
        .into_option()
        .unwrap();

    assert_eq!(product.name, "first");
}

#[test]
fn test_malformed_json_is_decode_error() {
    let store = store_from_str(r#"[{"id": "123", "name": "John"#);

    let err = find_by_id::<Customer>(&store.path, "123").unwrap_err();

    assert!(matches!(err, StoreError::Decode { .. }), "got {err:?}");
}

#[test]
fn test_top_level_object_is_decode_error() {
    let store = store_from_str(r#"{"id": "123", "name": "John Doe"}"#);

    let err = find_by_id::<Customer>(&store.path, "123").unwrap_err();

    assert!(matches!(err, StoreError::Decode { .. }), "got {err:?}");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = find_by_id::<Product>(dir.path().join("nope.json"), "1").unwrap_err();

    assert!(matches!(err, StoreError::Io { .. }), "got {err:?}");
}

#[test]
fn test_record_without_identifier_is_skipped() {
    let store = store_from_values(vec![
        json!({"name": "no identifier at all"}),
        json!({"ID": 123, "name": "numeric identifier"}),
        json!({"ID": "123", "name": "valid"}),
    ]);

    let record: Value = find_by_id(&store.path, "123")
        .unwrap()
        .into_option()
        .unwrap();

    assert_eq!(record["name"], "valid");
}

#[test]
fn test_typed_record_without_id_matches_empty_target() {
    let store = store_from_values(vec![
        json!({"name": "missing id", "price": 1.0}),
        json!({"id": "p-2", "name": "present", "price": 2.5}),
    ]);

    let defaulted = find_by_id::<Product>(&store.path, "")
        .unwrap()
        .into_option()
        .unwrap();
    assert_eq!(defaulted.name, "missing id");

    let product = find_by_id::<Product>(&store.path, "p-2")
        .unwrap()
        .into_option()
        .unwrap();
    assert_eq!(product.price, 2.5);
}

#[test]
fn test_explicit_empty_id_wins_over_missing_id() {
    let store = store_from_values(vec![
        json!({"id": "", "name": "blank"}),
        json!({"name": "missing"}),
    ]);

    let customer = find_by_id::<Customer>(&store.path, "")
        .unwrap()
        .into_option()
        .unwrap();

    assert_eq!(customer.name, "blank");
}

#[test]
fn test_empty_store_never_finds() {
    let store = store_from_str("[]");

    for id in ["", "1", "123", "anything"] {
        assert_eq!(
            find_by_id::<Customer>(&store.path, id).unwrap(),
            Lookup::NotFound
        );
        assert_eq!(
            find_by_id::<Value>(&store.path, id).unwrap(),
            Lookup::NotFound
        );
    }
}

#[test]
fn test_repeated_lookups_are_idempotent() {
    let store = store_from_values(vec![
        json!({"id": "a", "name": "A", "price": 3.0}),
        json!({"id": "b", "name": "B", "price": 4.0}),
    ]);

    let first = find_by_id::<Product>(&store.path, "b").unwrap();
    for _ in 0..5 {
        assert_eq!(find_by_id::<Product>(&store.path, "b").unwrap(), first);
    }

    let missing = find_by_id::<Product>(&store.path, "z").unwrap();
    assert_eq!(find_by_id::<Product>(&store.path, "z").unwrap(), missing);
}

#[test]
fn test_store_changes_are_seen_on_next_lookup() {
    let store = store_from_values(vec![json!({"id": "1", "name": "before"})]);
    assert!(find_by_id::<Product>(&store.path, "2").unwrap() == Lookup::NotFound);

    std::fs::write(&store.path, r#"[{"id": "2", "name": "after"}]"#).unwrap();

    let product = find_by_id::<Product>(&store.path, "2")
        .unwrap()
        .into_option()
        .unwrap();
    assert_eq!(product.name, "after");
}
