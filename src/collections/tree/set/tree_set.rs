use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Iter;
use crate::collections::fail_fast::{Cursor, ModCount, Traverse};
use crate::collections::traits::{Set, Sink, Source};
use crate::collections::tree::TreeMap;
use crate::error::EmptyCollection;
use crate::order::{Comparator, Natural};

/// A set of unique values kept in ascending order by a [`Comparator`].
///
/// A TreeSet is a [`TreeMap`] with `()` for every value, so it has the same red-black balancing
/// and the same `O(log n)` operations. Two values are duplicates when the comparator reports them
/// equal.
///
/// # Examples
/// ```
/// # use core_collections::collections::tree::TreeSet;
/// let numbers: TreeSet<i32> = [42, 7, 19, 7, 3].into_iter().collect();
///
/// assert_eq!(numbers.len(), 4);
/// assert_eq!(numbers.to_string(), "{3, 7, 19, 42}");
/// assert_eq!(numbers.first(), Some(&3));
/// assert_eq!(numbers.higher(&7), Some(&19));
/// ```
pub struct TreeSet<T, C = Natural> {
    pub(crate) inner: TreeMap<T, (), C>,
}

impl<T: Ord> TreeSet<T> {
    /// Creates a new, empty TreeSet ordered by the items' [`Ord`] implementation.
    pub fn new() -> TreeSet<T> {
        TreeSet {
            inner: TreeMap::new(),
        }
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Creates a new, empty TreeSet ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> TreeSet<T, C> {
        TreeSet {
            inner: TreeMap::with_comparator(comparator),
        }
    }

    /// Adds `item` to the set, returning true if no equal item was present. An existing equal
    /// item is kept and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the stored item equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.get_entry(item).map(|(stored, _)| stored)
    }

    /// Removes the item equal to `item`, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes and returns the stored item equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.remove_entry(item).map(|(stored, _)| stored)
    }

    /// Returns the greatest item less than or equal to `item`.
    pub fn floor<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.floor_key(item)
    }

    /// Returns the least item greater than or equal to `item`.
    pub fn ceiling<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.ceiling_key(item)
    }

    /// Returns the greatest item strictly less than `item`.
    pub fn lower<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.lower_key(item)
    }

    /// Returns the least item strictly greater than `item`.
    pub fn higher<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.higher_key(item)
    }
}

impl<T, C> TreeSet<T, C> {
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    pub const fn mod_count(&self) -> ModCount {
        self.inner.mod_count()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Returns the least item, or None if the set is empty.
    pub fn first(&self) -> Option<&T> {
        self.inner.first_key()
    }

    /// Returns the greatest item, or None if the set is empty.
    pub fn last(&self) -> Option<&T> {
        self.inner.last_key()
    }

    /// Returns the least item, or an [`EmptyCollection`] error if the set is empty.
    pub fn try_first(&self) -> Result<&T, EmptyCollection> {
        self.inner.try_first_key()
    }

    /// Returns the greatest item, or an [`EmptyCollection`] error if the set is empty.
    pub fn try_last(&self) -> Result<&T, EmptyCollection> {
        self.inner.try_last_key()
    }

    /// Removes and returns the least item.
    pub fn pop_first(&mut self) -> Option<T> {
        self.inner.pop_first().map(|(item, _)| item)
    }

    /// Removes and returns the greatest item.
    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop_last().map(|(item, _)| item)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all items in ascending order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.keys())
    }

    /// Returns a fail-fast [`Cursor`] over the items, in ascending order.
    pub fn cursor(&self) -> Cursor<TreeSet<T, C>> {
        Cursor::new(self)
    }
}

impl<T, C> Traverse for TreeSet<T, C> {
    type Pos = usize;

    type Item<'a> = &'a T where Self: 'a;

    type Owned = T;

    fn mod_count(&self) -> ModCount {
        self.inner.mod_count()
    }

    fn first_pos(&self) -> Option<usize> {
        self.inner.first_pos()
    }

    fn next_pos(&self, pos: usize) -> Option<usize> {
        self.inner.next_pos(pos)
    }

    fn item_at(&self, pos: usize) -> &T {
        self.inner.item_at(pos).0
    }

    fn remove_at_pos(&mut self, pos: usize) -> (T, Option<usize>) {
        let ((item, ()), next) = self.inner.remove_at_pos(pos);
        (item, next)
    }
}

impl<T, C> Source<T> for TreeSet<T, C> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter<'a>(&'a self) -> Iter<'a, T>
    where
        T: 'a,
    {
        TreeSet::iter(self)
    }
}

impl<T, C: Comparator<T>> Sink<T> for TreeSet<T, C> {
    fn put(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T, C: Comparator<T>> Set<T> for TreeSet<T, C> {
    fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::with_comparator(C::default());
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T> + Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        TreeSet::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for TreeSet<T, C> {
    fn clone(&self) -> Self {
        TreeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq, C> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for TreeSet<T, C> {}

impl<T: Clone, C: Comparator<T> + Default> BitOr for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Clone, C: Comparator<T> + Default> BitAnd for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Clone, C: Comparator<T> + Default> BitXor for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Clone, C: Comparator<T> + Default> Sub for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Debug, C> Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSet")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T: Display, C> Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
