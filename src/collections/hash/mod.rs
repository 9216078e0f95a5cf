//! Hash-based collection types, [`HashMap`] and [`HashSet`].
//!
//! Both resolve collisions by separate chaining: every bucket is a small [`Vector`] of entries,
//! scanned in order with [`Eq`].
//!
//! It is a logic error for two keys that compare equal to produce different hashes. No runtime
//! check is made, such keys simply stop being found.
//!
//! [`Vector`]: crate::collections::contiguous::Vector

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::{HashMap, LoadFactor};
#[doc(inline)]
pub use set::HashSet;
