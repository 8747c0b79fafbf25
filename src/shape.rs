//! Rectangle factory.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A rectangle with its dimensions stored verbatim. No validation of sign or
/// finiteness is performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle<T> {
    pub width: T,
    pub height: T,
}

impl<T> Rectangle<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Computes `width * height` on demand.
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

/// Constructs a [`Rectangle`] from any multipliable numeric type.
///
/// ```rust
/// let rect = selkit::make_rectangle(3.0, 4.0);
/// assert_eq!(rect.area(), 12.0);
/// ```
pub fn make_rectangle<T>(width: T, height: T) -> Rectangle<T> {
    Rectangle { width, height }
}
