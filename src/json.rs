//! Generic JSON bridge.
//!
//! Thin wrappers over `serde_json` with this crate's error type. The target
//! type parameter plays the role of a capability template: the operations a
//! deserialized value exposes are fixed statically by the type it is parsed
//! into, never attached to the data after the fact.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::JsonError;

/// Serializes a value to compact JSON text (no whitespace, struct fields in
/// declaration order).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses JSON text into a `T`.
///
/// Fails with [`JsonError::Parse`] when the text is not valid JSON or does
/// not match `T`'s shape. Parse into [`serde_json::Value`] to accept any
/// well-formed document.
///
/// ```rust
/// use selkit::{Rectangle, from_json};
///
/// let rect: Rectangle<f64> = from_json(r#"{"width":3.0,"height":4.0}"#).unwrap();
/// assert_eq!(rect.area(), 12.0);
/// ```
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(text)?)
}
