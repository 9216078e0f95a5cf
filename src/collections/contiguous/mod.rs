//! Contiguous collection types. [`Vector`] is the growable sequence, built on top of [`Array`],
//! a fixed-size heap buffer which also backs the buckets of
//! [`HashMap`](crate::collections::hash::HashMap).

pub mod array;
pub mod vector;

mod iter;

#[doc(inline)]
pub use array::Array;
pub use iter::IntoIter;
#[doc(inline)]
pub use vector::Vector;
