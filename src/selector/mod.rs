//! CSS selector assembly.
//!
//! - [`SelectorBuilder`]: fragment accumulator with build-time validation
//! - [`FragmentKind`]: the canonical fragment order used by the validation
//! - [`Combinator`]: descendant, child (`>`), sibling (`~`), adjacent (`+`)
//! - Facade functions ([`element`], [`id`], [`class`], [`attr`],
//!   [`pseudo_class`], [`pseudo_element`], [`combine`]): the construction
//!   entry points
//!
//! ## Example
//!
//! ```rust
//! use selkit::{Combinator, combine, element};
//!
//! let link = element("a").attr(r#"href$=".png""#).unwrap();
//! let row = combine(element("tr"), Combinator::Child, link);
//! assert_eq!(row.stringify(), r#"tr > a[href$=".png"]"#);
//! ```

mod builder;
mod facade;

pub use builder::{Combinator, FragmentKind, SelectorBuilder};
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
