use std::fmt;

use crate::error::SelectorError;

/// The kinds of fragment a compound selector is made of, in canonical CSS
/// order. The derived `Ord` is that order; the builder uses it for its
/// monotonic high-water-mark check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    fn as_str(self) -> &'static str {
        match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS combinator joining two compound selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// Joins two rendered selectors with a single space on each side of the
    /// combinator symbol. The descendant combinator's symbol is the space
    /// itself, so its join is one space total.
    pub(crate) fn join(self, left: &str, right: &str) -> String {
        match self {
            Combinator::Descendant => format!("{left} {right}"),
            Combinator::Child => format!("{left} > {right}"),
            Combinator::AdjacentSibling => format!("{left} + {right}"),
            Combinator::GeneralSibling => format!("{left} ~ {right}"),
        }
    }
}

/// Accumulates selector fragments and renders them as a CSS selector string.
///
/// Fragments must be supplied in canonical CSS order (element, id, classes,
/// attributes, pseudo-classes, pseudo-element); the singleton kinds may be
/// set at most once. Violations fail on the offending call, before any
/// mutation, with a [`SelectorError`].
///
/// Builders are created through the free functions in [`crate::selector`]
/// (one per fragment kind, plus [`combine`](crate::selector::combine));
/// each setter consumes and returns the builder for fluent chaining.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Latest fragment kind set so far. Monotonic: a setter for an earlier
    /// kind fails once a later kind has been reached.
    reached: Option<FragmentKind>,
}

impl SelectorBuilder {
    /// Seeds a fresh builder with a single fragment. This is the entry point
    /// used by the facade functions; the first fragment on an empty builder
    /// cannot violate ordering or cardinality.
    pub(crate) fn seeded(kind: FragmentKind, value: String) -> Self {
        let mut builder = SelectorBuilder {
            reached: Some(kind),
            ..SelectorBuilder::default()
        };
        match kind {
            FragmentKind::Element => builder.element = Some(value),
            FragmentKind::Id => builder.id = Some(value),
            FragmentKind::Class => builder.classes.push(value),
            FragmentKind::Attribute => builder.attributes.push(value),
            FragmentKind::PseudoClass => builder.pseudo_classes.push(value),
            FragmentKind::PseudoElement => builder.pseudo_element = Some(value),
        }
        builder
    }

    fn advance(&mut self, kind: FragmentKind) -> Result<(), SelectorError> {
        match self.reached {
            Some(after) if after > kind => Err(SelectorError::OutOfOrder {
                fragment: kind,
                after,
            }),
            _ => {
                self.reached = Some(kind);
                Ok(())
            }
        }
    }

    /// Sets the type (element) fragment, e.g. `div`.
    pub fn element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        if self.element.is_some() {
            return Err(SelectorError::DuplicateFragment(FragmentKind::Element));
        }
        self.advance(FragmentKind::Element)?;
        self.element = Some(name.into());
        Ok(self)
    }

    /// Sets the id fragment, rendered as `#name`.
    pub fn id(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        if self.id.is_some() {
            return Err(SelectorError::DuplicateFragment(FragmentKind::Id));
        }
        self.advance(FragmentKind::Id)?;
        self.id = Some(name.into());
        Ok(self)
    }

    /// Appends a class fragment, rendered as `.name`. Repeatable; insertion
    /// order is preserved in the output.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.advance(FragmentKind::Class)?;
        self.classes.push(name.into());
        Ok(self)
    }

    /// Appends an attribute fragment, rendered as `[spec]`. The attribute
    /// text is opaque (e.g. `href$=".png"`); no syntax validation is done.
    pub fn attr(mut self, spec: impl Into<String>) -> Result<Self, SelectorError> {
        self.advance(FragmentKind::Attribute)?;
        self.attributes.push(spec.into());
        Ok(self)
    }

    /// Appends a pseudo-class fragment, rendered as `:name`.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.advance(FragmentKind::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        Ok(self)
    }

    /// Sets the pseudo-element fragment, rendered as `::name`. Terminal in
    /// the canonical order, so only the cardinality check applies.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        if self.pseudo_element.is_some() {
            return Err(SelectorError::DuplicateFragment(FragmentKind::PseudoElement));
        }
        self.advance(FragmentKind::PseudoElement)?;
        self.pseudo_element = Some(name.into());
        Ok(self)
    }

    /// Renders the accumulated fragments in canonical order. A pure read:
    /// the builder is left untouched and can be rendered again. An empty
    /// builder renders the empty string.
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        if let Some(element) = &self.element {
            out.push_str(element);
        }
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        for attr in &self.attributes {
            out.push('[');
            out.push_str(attr);
            out.push(']');
        }
        for pseudo in &self.pseudo_classes {
            out.push(':');
            out.push_str(pseudo);
        }
        if let Some(pseudo) = &self.pseudo_element {
            out.push_str("::");
            out.push_str(pseudo);
        }
        out
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}
