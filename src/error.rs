//! Error types for selector building and JSON bridging.
//!
//! Selector construction enforces CSS fragment order and cardinality at build
//! time, so callers get an error on the offending call rather than a malformed
//! string at render time.

use thiserror::Error;

use crate::selector::FragmentKind;

/// Errors raised while assembling a selector.
///
/// # Examples
///
/// ```rust
/// use selkit::{SelectorError, element};
/// use selkit::FragmentKind;
///
/// // An id may only be set once per selector.
/// let err = element("a").id("x").unwrap().id("y").unwrap_err();
/// assert_eq!(err, SelectorError::DuplicateFragment(FragmentKind::Id));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton fragment kind (element, id, pseudo-element) was set twice
    /// on the same builder. The first value is retained; the failing call
    /// leaves the builder unchanged.
    #[error("duplicate {0} fragment: a selector holds at most one")]
    DuplicateFragment(FragmentKind),

    /// A fragment arrived after a fragment of a later kind in the canonical
    /// CSS order (element, id, class, attribute, pseudo-class,
    /// pseudo-element) was already set.
    #[error("{fragment} fragment out of order: a {after} fragment is already set")]
    OutOfOrder {
        /// The fragment kind the caller tried to set.
        fragment: FragmentKind,
        /// The later-ordered kind already present on the builder.
        after: FragmentKind,
    },
}

/// Errors raised by the JSON bridge.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input text was not valid JSON, or did not match the target type.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
