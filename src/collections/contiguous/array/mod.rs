//! A module containing [`Array`], a runtime-sized heap buffer.
//!
//! Owned iteration uses the shared [`IntoIter`](super::IntoIter), while [`IterMut`](std::slice::IterMut)
//! and [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
