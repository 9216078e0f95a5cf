use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::collections::fail_fast::{Cursor, ModCount, Traverse};
use crate::collections::hash::{HashMap, LoadFactor};
use crate::collections::traits::{Set, Sink, Source};
use crate::util::fmt::{DebugRaw, join_debug};

/// A set of unique values which relies on the values implementing [`Hash`].
///
/// A HashSet is a [`HashMap`] with `()` for every value, so it shares the map's chaining, load
/// factor and growth. The same logic errors apply: a value must not change its hash while in the
/// set, and equal values must hash equally.
///
/// # Examples
/// ```
/// # use core_collections::collections::hash::HashSet;
/// let mut words: HashSet<&str> = HashSet::new();
/// assert!(words.insert("apple"));
/// assert!(words.insert("pear"));
/// assert!(!words.insert("apple"));
///
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("pear"));
/// assert!(words.remove("pear"));
/// assert!(!words.contains("pear"));
/// ```
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit type takes no space, so each chain only stores the items.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with no buckets and the default value for `B`.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with enough buckets to hold `cap` items without rehashing.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }

    /// Creates a new HashSet with no buckets, which rehashes according to `load_factor`.
    pub fn with_load_factor(load_factor: LoadFactor) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_load_factor(load_factor),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn bucket_count(&self) -> usize {
        self.inner.bucket_count()
    }

    pub const fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    pub const fn mod_count(&self) -> ModCount {
        self.inner.mod_count()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. An existing equal
    /// item is kept and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Returns true if the set contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the stored item equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_entry(item).map(|(stored, _)| stored)
    }

    /// Removes the item equal to `item`, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes and returns the stored item equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(stored, _)| stored)
    }

    /// Retains only the items for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.inner.retain(|item, _| f(item))
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Removes every item, keeping the buckets.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all items in the HashSet, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.keys())
    }

    /// Returns a fail-fast [`Cursor`] over the items.
    pub fn cursor(&self) -> Cursor<HashSet<T, B>> {
        Cursor::new(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Traverse for HashSet<T, B> {
    type Pos = (usize, usize);

    type Item<'a> = &'a T where Self: 'a;

    type Owned = T;

    fn mod_count(&self) -> ModCount {
        self.inner.mod_count()
    }

    fn first_pos(&self) -> Option<(usize, usize)> {
        self.inner.first_pos()
    }

    fn next_pos(&self, pos: (usize, usize)) -> Option<(usize, usize)> {
        self.inner.next_pos(pos)
    }

    fn item_at(&self, pos: (usize, usize)) -> &T {
        self.inner.item_at(pos).0
    }

    fn remove_at_pos(&mut self, pos: (usize, usize)) -> (T, Option<(usize, usize)>) {
        let ((item, ()), next) = self.inner.remove_at_pos(pos);
        (item, next)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Source<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter<'a>(&'a self) -> Iter<'a, T>
    where
        T: 'a,
    {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Sink<T> for HashSet<T, B> {
    fn put(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!("#{{{}}}", join_debug(self.iter(), ", "))))
            .field("len", &self.len())
            .field("bucket_count", &self.bucket_count())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
