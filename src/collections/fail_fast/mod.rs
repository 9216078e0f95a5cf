//! The fail-fast traversal protocol shared by every collection in this crate.
//!
//! Rust's borrowing iterators (`iter()` and friends) can't observe a concurrent modification
//! because the borrow checker rules it out. [`Cursor`] is the detached alternative: it holds only
//! a position and a snapshot of the collection's [`ModCount`], borrowing the collection for a
//! single step at a time. That lets a caller interleave traversal with mutation, and the cursor
//! reports [`ConcurrentModification`](crate::error::ConcurrentModification) rather than yielding
//! something inconsistent. [`Cursor::remove_current`] is the one sanctioned way to mutate mid-way.

mod cursor;
mod mod_count;
mod tests;

pub use cursor::*;
pub use mod_count::*;
