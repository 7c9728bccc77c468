//! # Stack Module
//!
//! A last-in-first-out container of `String` values.
//!
//! The elements live in a `Vec<String>` whose tail is the top of the stack,
//! so `push` and `pop` are amortized O(1).
//!
//! ## Invariants
//!
//! - `size()` always equals the number of elements held
//! - `pop()` returns the most recently pushed element not yet popped
//! - A failed `pop()` leaves the stack untouched

use crate::StackError;

/// A LIFO stack of strings.
///
/// A freshly constructed stack (via [`Stack::new`] or [`Default`]) is empty.
/// The stack owns its elements and needs no explicit teardown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    /// Ordered elements; the last one is the top.
    elements: Vec<String>,
}

impl Stack {
    /// Create a new empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `x` onto the top of the stack.
    ///
    /// Never fails. Any string is accepted, including the empty string.
    pub fn push(&mut self, x: impl Into<String>) {
        self.elements.push(x.into());
    }

    /// Remove and return the element on top of the stack.
    ///
    /// Returns `StackError::EmptyStack` if the stack holds no elements,
    /// in which case nothing is mutated.
    pub fn pop(&mut self) -> Result<String, StackError> {
        self.elements.pop().ok_or(StackError::EmptyStack)
    }

    /// Number of elements currently on the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Whether the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element `pop` would return next, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.elements.last().map(String::as_str)
    }

    /// Iterate over the elements from top to bottom (pop order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.elements.iter().rev().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for Stack {
    /// Push every item in order; the last item ends up on top.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Stack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

// =============================================================================
// TESTS
// =============================================================================
