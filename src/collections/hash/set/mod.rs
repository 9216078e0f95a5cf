//! A module containing [`HashSet`] and associated types.
//!
//! The included types provide owned and borrowed iteration over a set's elements. Set operations
//! on two HashSets come from the [`Set`](crate::collections::traits::Set) trait, or from the
//! operators (`|`, `&`, `^` and `-`) for owned results.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod tests;

pub use hash_set::*;
pub use iter::*;
