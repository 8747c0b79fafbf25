//! # selkit - fluent CSS selector building
//!
//! A small toolkit centered on a validating CSS selector builder, with two
//! companion utilities: a rectangle factory and generic JSON helpers.
//!
//! Selectors are assembled fragment by fragment and rendered to standard
//! CSS3 selector syntax. The builder enforces the canonical fragment order
//! (element, id, classes, attributes, pseudo-classes, pseudo-element) and
//! rejects duplicate singleton fragments, so an invalid chain fails on the
//! offending call instead of producing a malformed string.
//!
//! ## Quick Start
//!
//! ```rust
//! use selkit::{Combinator, combine, element, id};
//!
//! let selector = id("main")
//!     .class("container").expect("classes follow ids")
//!     .class("editable").expect("classes repeat freely");
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let combined = combine(
//!     element("div").id("main").expect("id follows element"),
//!     Combinator::AdjacentSibling,
//!     element("table").id("data").expect("id follows element"),
//! );
//! assert_eq!(combined.stringify(), "div#main + table#data");
//! ```
//!
//! ## Supported Selector Syntax
//!
//! - Type selectors: `div`, `table`
//! - ID selector: `#main` (at most one)
//! - Class selectors: `.primary.active` (repeatable)
//! - Attribute selectors: `[disabled][href$=".png"]` (repeatable, one
//!   bracket pair per attribute; the attribute text itself is not parsed)
//! - Pseudo-classes: `:hover:focus` (repeatable)
//! - Pseudo-element: `::before` (at most one)
//! - Combinators: descendant (space), child (`>`), general sibling (`~`),
//!   adjacent sibling (`+`)
//!
//! Selector matching against a document and CSS parsing are out of scope;
//! this crate only produces selector strings.
//!
//! ## Modules
//!
//! - [`selector`]: the builder, its facade functions, and combinators
//! - [`shape`]: rectangle factory
//! - [`json`]: generic serialize/deserialize helpers
//! - [`error`]: error types

pub mod error;
pub mod json;
pub mod selector;
pub mod shape;

pub use error::{JsonError, SelectorError};
pub use json::{from_json, to_json};
pub use selector::{
    Combinator, FragmentKind, SelectorBuilder, attr, class, combine, element, id, pseudo_class,
    pseudo_element,
};
pub use shape::{Rectangle, make_rectangle};
