use std::collections::BTreeMap;

use compfmt::{format, Culture, FormatError, Value};

fn en() -> std::sync::Arc<Culture> {
    Culture::lookup("en-US")
}

fn user() -> Value {
    let mut address = BTreeMap::new();
    address.insert("city".to_string(), Value::from("Lund"));

    let mut map = BTreeMap::new();
    map.insert("name".to_string(), Value::from("Ada"));
    map.insert("age".to_string(), Value::from(36));
    map.insert("address".to_string(), Value::Map(address));
    map.insert(
        "tags".to_string(),
        Value::from(vec!["admin", "ops"]),
    );
    Value::Map(map)
}

#[test]
fn test_member_access() {
    assert_eq!(format("{name}", &[user()], &en()).unwrap(), "Ada");
    assert_eq!(format("{address.city}", &[user()], &en()).unwrap(), "Lund");
}

#[test]
fn test_index_access() {
    assert_eq!(format("{tags[0]}/{tags[1]}", &[user()], &en()).unwrap(), "admin/ops");
}

#[test]
fn test_path_with_subformat_and_alignment() {
    assert_eq!(format("{age,5:D3}", &[user()], &en()).unwrap(), "  036");
}

#[test]
fn test_unresolved_path_renders_empty() {
    assert_eq!(format("[{missing}]", &[user()], &en()).unwrap(), "[]");
    assert_eq!(format("[{tags[9]}]", &[user()], &en()).unwrap(), "[]");
    assert_eq!(format("[{name.deeper}]", &[user()], &en()).unwrap(), "[]");
}

#[test]
fn test_path_against_empty_arguments_renders_empty() {
    assert_eq!(format("[{name}]", &[], &en()).unwrap(), "[]");
}

#[test]
fn test_malformed_path_is_an_error() {
    assert_eq!(
        format("{a..b}", &[user()], &en()),
        Err(FormatError::InvalidPath {
            path: "a..b".to_string()
        })
    );
    assert!(matches!(
        format("{tags[x]}", &[user()], &en()),
        Err(FormatError::InvalidPath { .. })
    ));
}

#[test]
fn test_single_character_path() {
    let mut map = BTreeMap::new();
    map.insert("x".to_string(), Value::from(7));
    assert_eq!(format("{x}", &[Value::Map(map)], &en()).unwrap(), "7");
}

#[cfg(feature = "json")]
#[test]
fn test_json_values_navigate() {
    let order: Value = serde_json::json!({
        "id": 981,
        "customer": {"name": "Ada"},
        "lines": [{"total": 1234.5}]
    })
    .into();

    assert_eq!(
        format("#{id} for {customer.name}: {lines[0].total:C}", &[order], &en()).unwrap(),
        "#981 for Ada: $1,234.50"
    );
}
