//! Various general-purpose collection types.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides most of the read-only sequence operations. The node-based collections
//! ([`linked`] and [`tree`]) keep their nodes in a [`Vector`](contiguous::Vector) arena and link
//! them by index. Raw pointers appear in [`contiguous`], which owns the allocations, and in the
//! linked list's `IterMut`, which hands out disjoint `&mut` items from its slot arena.

pub mod contiguous;
pub mod fail_fast;
pub mod traits;

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
