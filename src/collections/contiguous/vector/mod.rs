//! A module containing [`Vector`], the growable contiguous sequence.
//!
//! Owned iteration uses the shared [`IntoIter`](super::IntoIter). Borrowed iteration comes from
//! [`std::slice`] through Vector's [`Deref<Target = [T]>`](std::ops::Deref) implementation, while
//! [`Vector::cursor`] provides fail-fast iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod tests;
mod vector;

pub use vector::*;
