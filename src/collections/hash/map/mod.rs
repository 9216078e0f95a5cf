//! A module containing [`HashMap`] and associated types.
//!
//! Other than [`LoadFactor`], the included types are for iteration, providing owned and borrowed
//! iteration over entries, keys or values in a map.
//!
//! As a note, there is no mutable iterator over keys because mutating the keys of a HashMap in
//! place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;
mod iter;
mod load_factor;

pub use hash_map::*;
pub use iter::*;
pub use load_factor::*;
