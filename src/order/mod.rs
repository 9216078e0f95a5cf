//! The ordering abstraction used by [`TreeMap`](crate::collections::tree::TreeMap),
//! [`TreeSet`](crate::collections::tree::TreeSet) and the sorting algorithms in this module.
//!
//! A [`Comparator`] is either the element type's own [`Ord`] implementation, through [`Natural`],
//! or an external ordering supplied by the caller, such as a closure. It is a logic error for a
//! comparator to be inconsistent (`compare(a, b)` disagreeing with `compare(b, a)`) or
//! non-transitive over the elements of a single sorted collection. No runtime check is made, a
//! sorted collection given such a comparator simply stops finding its own entries.

mod comparator;
mod sort;
mod tests;

pub use comparator::*;
pub use sort::*;
