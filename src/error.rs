//! Error types surfaced by the collections in this crate.
//!
//! Each failure has its own small type (usually a ZST) so that methods can state exactly what can
//! go wrong. The enums at the bottom of this module combine them for callers that want a single
//! error type, and every specific error converts into [`CollectionError`] via `?`.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An operation that needs at least one element was called on an empty collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires a non-empty collection!")]
pub struct EmptyCollection;

/// A lookup didn't find an entry for the requested key.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No entry found for key!")]
pub struct KeyNotFound;

/// A [`Cursor`](crate::collections::fail_fast::Cursor) noticed that its collection was
/// structurally modified by something other than the cursor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentModification {
    pub expected: u64,
    pub found: u64,
}

impl Display for ConcurrentModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collection modified during iteration! (expected modification count {}, found {})",
            self.expected,
            self.found
        )
    }
}

impl Error for ConcurrentModification {}

/// [`Cursor::remove_current`](crate::collections::fail_fast::Cursor::remove_current) was called
/// without a current element, either before the first call to `next` or twice in a row.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no current element to remove!")]
pub struct NoCurrentElement;

/// A linked list handle doesn't refer to a live node of the list it was used with.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Handle doesn't refer to a node in this list!")]
pub struct InvalidHandle;

/// Errors produced when stepping or mutating through a cursor.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    ConcurrentModification(ConcurrentModification),
    NoCurrentElement(NoCurrentElement),
}

/// Every error this crate can produce.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyCollection(EmptyCollection),
    KeyNotFound(KeyNotFound),
    ConcurrentModification(ConcurrentModification),
    NoCurrentElement(NoCurrentElement),
    InvalidHandle(InvalidHandle),
}

impl From<CursorError> for CollectionError {
    fn from(value: CursorError) -> Self {
        match value {
            CursorError::ConcurrentModification(e) => e.into(),
            CursorError::NoCurrentElement(e) => e.into(),
        }
    }
}
