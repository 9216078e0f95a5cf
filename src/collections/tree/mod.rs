//! Sorted collection types, [`TreeMap`] and [`TreeSet`].
//!
//! Both are red-black trees ordered by a [`Comparator`](crate::order::Comparator), which is fixed
//! when the collection is created. Lookups, insertions and removals take `O(log n)` and iteration
//! visits every entry in ascending order.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::TreeMap;
#[doc(inline)]
pub use set::TreeSet;
