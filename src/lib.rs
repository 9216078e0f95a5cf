//! A small library of general-purpose, in-memory container types, written from the ground up on
//! top of a raw-allocation [`Array`](collections::contiguous::Array).
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): a growable contiguous sequence.
//! - [`LinkedList`](collections::linked::LinkedList): a doubly linked sequence with stable node
//!   handles.
//! - [`HashMap`](collections::hash::HashMap) and [`HashSet`](collections::hash::HashSet): unordered
//!   associations using separate chaining.
//! - [`TreeMap`](collections::tree::TreeMap) and [`TreeSet`](collections::tree::TreeSet): sorted
//!   associations backed by a red-black tree, ordered by a [`Comparator`](order::Comparator).
//!
//! Every collection supports fail-fast traversal through a
//! [`Cursor`](collections::fail_fast::Cursor), which reports a concurrent modification instead of
//! yielding stale elements.
//!
//! # Error Handling
//! Methods that can fail come in pairs. The plain form follows [`std`]: lookups return an
//! [`Option`] and invalid indices panic. The `try_` form returns a [`Result`] with a small,
//! strongly typed error from [`error`], each of which converts into
//! [`CollectionError`](error::CollectionError) for callers that want one type. A lookup miss is
//! never an error in the plain form, an absent key simply gives [`None`].
//!
//! # Dependencies
//! This library doesn't use [`Vec`] outside of its tests. The collections are built from
//! [`Array`](collections::contiguous::Array), [`Vector`](collections::contiguous::Vector) and
//! each other. `derive_more` provides the derives for the error types.
//!
//! # Features
//! The `hash`, `linked` and `tree` features each enable the matching collection module. All three
//! are enabled by default through `collections-all`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error;
pub mod order;

pub(crate) mod util;
