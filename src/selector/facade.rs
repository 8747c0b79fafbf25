//! Entry points for selector construction.
//!
//! Callers never build a [`SelectorBuilder`] by hand: each function here
//! seeds a fresh builder with one fragment and hands it back for chaining.
//! The first fragment on an empty builder cannot violate ordering or
//! cardinality, so these functions are infallible.

use crate::selector::builder::{Combinator, FragmentKind, SelectorBuilder};

/// Starts a selector with a type (element) fragment, e.g. `div`.
pub fn element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Element, name.into())
}

/// Starts a selector with an id fragment, e.g. `#main`.
pub fn id(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Id, name.into())
}

/// Starts a selector with a class fragment, e.g. `.primary`.
pub fn class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Class, name.into())
}

/// Starts a selector with an attribute fragment, e.g. `[disabled]`.
pub fn attr(spec: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Attribute, spec.into())
}

/// Starts a selector with a pseudo-class fragment, e.g. `:hover`.
pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoClass, name.into())
}

/// Starts a selector with a pseudo-element fragment, e.g. `::before`.
pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoElement, name.into())
}

/// Joins two selectors with a combinator into a new builder.
///
/// Both operands are rendered and the joined text is seeded into the new
/// builder's element slot, with the high-water mark set accordingly: the
/// result can be combined again, still accepts later-ordered fragments, and
/// rejects a subsequent [`SelectorBuilder::element`] call as a duplicate.
pub fn combine(
    left: SelectorBuilder,
    combinator: Combinator,
    right: SelectorBuilder,
) -> SelectorBuilder {
    let joined = combinator.join(&left.stringify(), &right.stringify());
    SelectorBuilder::seeded(FragmentKind::Element, joined)
}
