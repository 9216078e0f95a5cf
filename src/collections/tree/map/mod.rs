//! A module containing [`TreeMap`] and associated types.
//!
//! Other than the map itself, the included types provide owned and borrowed iteration over
//! entries, keys or values, always in ascending key order and from either end.
//!
//! [`TreeMap`] is also re-exported under the parent module.

mod iter;
mod node;
mod tests;
mod tree_map;

pub use iter::*;
pub(crate) use node::*;
pub use tree_map::*;
