use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, mem};

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, LoadFactor, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::collections::fail_fast::{Cursor, ModCount, Traverse};
use crate::error::KeyNotFound;
use crate::util::fmt::{DebugIter, DebugRaw, join_debug};

/// The bucket count of the first allocation made by a HashMap that had none.
pub(crate) const MIN_BUCKETS: usize = 8;

const GROWTH_FACTOR: usize = 2;

/// A single bucket, holding every entry whose hash maps to it in insertion order.
pub(crate) type Chain<K, V> = Vector<(K, V)>;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Entries are kept in an [`Array`] of buckets, where each bucket is a chain of entries. A key's
/// bucket is its hash modulo the bucket count. Whenever an insertion leaves more entries than the
/// [`LoadFactor`] allows, the bucket count doubles and every entry is redistributed.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash,
/// or for two equal keys to hash differently. Because of this, HashMap's API prevents mutable
/// access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `contains_value` | `O(n)` |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* In the event of a hash collision, these functions will take additional time to scan the
/// chain. Chains stay short while the hash is well distributed, because of the load factor.
///
/// \** If the HashMap has reached its load factor, `insert` will rehash every entry, taking
/// `O(n)`. \* applies as well.
///
/// \*** If the HashMap has enough buckets for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Array<Chain<K, V>>,
    pub(crate) len: usize,
    pub(crate) load_factor: LoadFactor,
    pub(crate) hasher: B,
    pub(crate) mod_count: ModCount,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with no buckets and the default value for `B`. Memory will be
    /// allocated on the first insertion.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }

    /// Creates a new HashMap with enough buckets to hold `cap` entries without rehashing. The
    /// default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a new HashMap with no buckets, which rehashes according to `load_factor`.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::hash::{HashMap, LoadFactor};
    /// let mut map: HashMap<u8, u8> = HashMap::with_load_factor(LoadFactor::new(1, 1));
    /// for i in 0..8 {
    ///     map.insert(i, i);
    /// }
    /// assert_eq!(map.bucket_count(), 8);
    ///
    /// map.insert(8, 8);
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    pub fn with_load_factor(load_factor: LoadFactor) -> HashMap<K, V, B> {
        HashMap {
            load_factor,
            ..HashMap::new()
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with no buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Array::new(),
            len: 0,
            load_factor: LoadFactor::DEFAULT,
            hasher,
            mod_count: ModCount::new(),
        }
    }

    /// Creates a new HashMap with enough buckets for `cap` entries, using the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        let mut map = HashMap::with_hasher(hasher);
        map.reserve(cap);
        map
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the load factor that this HashMap rehashes at.
    pub const fn load_factor(&self) -> LoadFactor {
        self.load_factor
    }

    /// Returns a reference to the hasher.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns the current modification count, which changes whenever an entry is added or
    /// removed. Replacing the value of an existing key doesn't count.
    pub const fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, adding buckets if required. If
    /// the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::hash::HashMap;
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("b", 2), None);
    /// assert_eq!(map.insert("a", 3), Some(1));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Some(&3));
    /// assert_eq!(map.get("b"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.buckets.size() == 0 {
            self.rehash(MIN_BUCKETS);
        }

        let bucket = self.bucket_of(&key);
        let chain = &mut self.buckets[bucket];

        if let Some(existing) = chain.iter_mut().find(|entry| entry.0 == key) {
            return Some(mem::replace(&mut existing.1, value));
        }

        chain.push((key, value));
        self.len += 1;
        self.mod_count.bump();

        if self.len > self.load_factor.max_len(self.buckets.size()) {
            self.grow();
        }

        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (bucket, slot) = self.find(key)?;
        let (key, value) = &self.buckets[bucket][slot];
        Some((key, value))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a reference to the value associated with the provided `key`, or a [`KeyNotFound`]
    /// error.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (bucket, slot) = self.find(key)?;
        Some(&mut self.buckets[bucket][slot].1)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (bucket, slot) = self.find(key)?;
        Some(self.take(bucket, slot))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Increases the bucket count so that len + `extra` entries fit without exceeding the load
    /// factor.
    ///
    /// # Panics
    /// Panics if the required bucket count overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let needed = self.len.checked_add(extra).expect("Capacity overflow!");
        let bucket_count = self.load_factor.buckets_for(needed);

        if bucket_count > self.buckets.size() {
            self.rehash(bucket_count);
        }
    }

    /// Retains only the entries for which `f` returns true, visiting each entry once. Removed
    /// entries count as structural modifications.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut f: F) {
        for bucket in 0..self.buckets.size() {
            let mut slot = 0;
            while slot < self.buckets[bucket].len() {
                let (key, value) = &mut self.buckets[bucket][slot];
                if f(key, value) {
                    slot += 1;
                } else {
                    self.take(bucket, slot);
                }
            }
        }
    }

    /// Removes every entry, keeping the buckets.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }

        self.len = 0;
        self.mod_count.bump();
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            len: self.len,
        }
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable references to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: Default::default(),
            len: self.len,
        }
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns a fail-fast [`Cursor`] over the entries.
    pub fn cursor(&self) -> Cursor<HashMap<K, V, B>> {
        Cursor::new(self)
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> HashMap<K, V, B> {
    /// Returns true if any key is associated with a value equal to `value`. This is a linear scan
    /// of every entry.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|v| v == value)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Calculates the bucket for the provided `hashable`. The HashMap must have at least one
    /// bucket.
    pub(crate) fn bucket_of<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        let hash = self.hasher.hash_one(hashable);
        (hash % self.buckets.size() as u64) as usize
    }

    /// Finds the bucket and position within its chain of the entry for `key`, if there is one.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.size() == 0 {
            return None;
        }

        let bucket = self.bucket_of(key);
        let slot = self.buckets[bucket].iter().position(|entry| entry.0.borrow() == key)?;
        Some((bucket, slot))
    }

    /// Removes the entry at `slot` in the chain of `bucket`, keeping the chain's order.
    pub(crate) fn take(&mut self, bucket: usize, slot: usize) -> (K, V) {
        let entry = self.buckets[bucket].remove(slot);
        self.len -= 1;
        self.mod_count.bump();
        entry
    }

    /// Returns the position of the first entry at or after `slot` in `bucket`, moving on to
    /// later buckets as needed.
    pub(crate) fn seek_from(&self, mut bucket: usize, mut slot: usize) -> Option<(usize, usize)> {
        while bucket < self.buckets.size() {
            if slot < self.buckets[bucket].len() {
                return Some((bucket, slot));
            }

            bucket += 1;
            slot = 0;
        }

        None
    }

    /// Multiplies the bucket count by the growth factor until every entry fits within the load
    /// factor.
    pub(crate) fn grow(&mut self) {
        let mut bucket_count = self.buckets.size();
        while self.len > self.load_factor.max_len(bucket_count) {
            bucket_count = cmp::max(
                bucket_count.checked_mul(GROWTH_FACTOR).expect("Capacity overflow!"),
                MIN_BUCKETS,
            );
        }

        self.rehash(bucket_count);
    }

    /// Replaces the buckets with `bucket_count` new ones and redistributes every entry. Chains
    /// keep their relative order. Rehashing isn't a structural modification, the set of entries
    /// doesn't change.
    pub(crate) fn rehash(&mut self, bucket_count: usize) {
        // Replace the Array first so that we can consume the old Array.
        let old = mem::replace(&mut self.buckets, Array::repeat_default(bucket_count));

        for (key, value) in old.into_iter().flatten() {
            let bucket = self.bucket_of(&key);
            self.buckets[bucket].push((key, value));
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Traverse for HashMap<K, V, B> {
    type Pos = (usize, usize);

    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    type Owned = (K, V);

    fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    fn first_pos(&self) -> Option<(usize, usize)> {
        self.seek_from(0, 0)
    }

    fn next_pos(&self, (bucket, slot): (usize, usize)) -> Option<(usize, usize)> {
        self.seek_from(bucket, slot + 1)
    }

    fn item_at(&self, (bucket, slot): (usize, usize)) -> (&K, &V) {
        let (key, value) = &self.buckets[bucket][slot];
        (key, value)
    }

    fn remove_at_pos(
        &mut self,
        (bucket, slot): (usize, usize),
    ) -> ((K, V), Option<(usize, usize)>) {
        let entry = self.take(bucket, slot);
        // The rest of the chain has shifted down, so the next entry is now at slot.
        (entry, self.seek_from(bucket, slot))
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            buckets: self.buckets.clone(),
            len: self.len,
            load_factor: self.load_factor,
            hasher: self.hasher.clone(),
            mod_count: ModCount::new(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter().map(|chain| {
            DebugRaw(if chain.is_empty() {
                "-".into()
            } else {
                join_debug(chain.iter().map(|(k, v)| DebugRaw(format!("({k:?}: {v:?})"))), " -> ")
            })
        });

        f.debug_struct("HashMap")
            .field("buckets", &DebugIter(buckets))
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("load_factor", &DebugRaw(self.load_factor.to_string()))
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
