//! Integration tests for the rectangle factory and the JSON bridge.

use selkit::{JsonError, Rectangle, from_json, make_rectangle, to_json};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ============================================================================
// RECTANGLES
// ============================================================================

#[test]
fn test_rectangle_fields_stored_verbatim() {
    let rect = make_rectangle(3.0, 4.5);
    assert_eq!(rect.width, 3.0);
    assert_eq!(rect.height, 4.5);
}

#[test]
fn test_rectangle_area() {
    assert_eq!(make_rectangle(3.0, 4.0).area(), 12.0);
    assert_eq!(make_rectangle(7_i64, 6_i64).area(), 42);
}

#[test]
fn test_rectangle_negative_dimensions_unvalidated() {
    let rect = make_rectangle(-2.0, 5.0);
    assert_eq!(rect.area(), -10.0);
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_to_json_compact_fields_in_declaration_order() {
    let rect = make_rectangle(3.0, 4.0);
    assert_eq!(to_json(&rect).unwrap(), r#"{"width":3.0,"height":4.0}"#);
}

#[test]
fn test_to_json_nested_plain_data() {
    let value = json!({"name": "page", "tags": ["a", "b"], "depth": 2});
    let text = to_json(&value).unwrap();
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, value);
}

#[test]
fn test_to_json_escapes_strings() {
    let text = to_json(&json!("quote \" and \\ backslash")).unwrap();
    assert_eq!(text, r#""quote \" and \\ backslash""#);
}

// ============================================================================
// DESERIALIZATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Page {
    title: String,
    visits: u32,
}

#[test]
fn test_round_trip_reproduces_data_fields() {
    let page = Page {
        title: "home".to_string(),
        visits: 41,
    };
    let restored: Page = from_json(&to_json(&page).unwrap()).unwrap();
    assert_eq!(restored, page);
}

#[test]
fn test_rectangle_round_trip() {
    let rect = make_rectangle(3.0, 4.0);
    let restored: Rectangle<f64> = from_json(&to_json(&rect).unwrap()).unwrap();
    assert_eq!(restored, rect);
    assert_eq!(restored.area(), 12.0);
}

#[test]
fn test_from_json_into_untyped_value() {
    let value: Value = from_json(r#"{"a":[1,2],"b":null}"#).unwrap();
    assert_eq!(value["a"][1], json!(2));
    assert!(value["b"].is_null());
}

#[test]
fn test_from_json_invalid_text_is_parse_error() {
    let result: Result<Value, JsonError> = from_json("{not json");
    assert!(matches!(result, Err(JsonError::Parse(_))));
}

#[test]
fn test_from_json_shape_mismatch_is_parse_error() {
    let result: Result<Page, JsonError> = from_json(r#"{"title":"home"}"#);
    assert!(matches!(result, Err(JsonError::Parse(_))));
}
