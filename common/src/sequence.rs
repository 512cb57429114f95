//! # Checked Sequences
//!
//! A growable, ordered list whose positional access fails with an error
//! instead of panicking or handing back a default.
//!
//! Nesting is by value: pushing a sequence into a [`SequenceOfSequences`]
//! moves it, so a caller that keeps using the inner sequence must push a clone.
//! Mutating it afterwards is never visible through the outer
//! sequence.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SequenceError {
    /// Position is past the last element.
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence<T> {
    items: Vec<T>,
}

/// Sequence whose elements are themselves integer sequences.
pub type SequenceOfSequences = Sequence<Sequence<i32>>;

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.items.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let len: usize = self.items.len();
        let slot: &mut T = self
            .items
            .get_mut(index)
            .ok_or(SequenceError::OutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Space separated elements, e.g. `10 20`.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
