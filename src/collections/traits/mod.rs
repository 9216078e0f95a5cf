//! Traits describing what a collection can do, independent of how it stores its elements.
//!
//! [`Source`] and [`Sink`] split a collection into its read and write halves, so a function can ask
//! for exactly the capability it uses. [`Set`] adds set algebra on top of [`Source`] for any
//! collection with a membership test.

pub mod set;
pub mod view;

mod tests;

#[doc(inline)]
pub use set::Set;
#[doc(inline)]
pub use view::{Sink, Source, copy_into};
