//! Linked collection types. Revolves around [`LinkedList`] and the [`NodeHandle`]s it hands out
//! for constant time insertion and removal in the middle of the list.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, NodeHandle};
