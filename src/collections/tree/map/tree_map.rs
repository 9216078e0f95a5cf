use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Color, IntoKeys, IntoValues, Iter, Keys, NIL, Node, Side, Values, extreme, step};
use crate::collections::contiguous::Vector;
use crate::collections::fail_fast::{Cursor, ModCount, Traverse};
use crate::error::{EmptyCollection, KeyNotFound};
use crate::order::{Comparator, Natural};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

/// A map of keys to values, kept in ascending order by a [`Comparator`] over the keys.
///
/// The entries form a red-black tree, stored in a [`Vector`] arena with links by index. Index 0
/// holds a black sentinel that stands in for every missing child. Balancing after each insertion
/// and removal keeps the height within `2 * log2(n + 1)`, so every lookup, insertion and removal
/// takes `O(log n)`.
///
/// Two keys are the same key when the comparator reports [`Ordering::Equal`], regardless of their
/// [`PartialEq`] implementation. It is a logic error for the comparator's ordering of the keys in
/// a map to change while they are in it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the TreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `first_key`/`last_key` | `O(log n)` |
/// | `floor_key`/`ceiling_key` | `O(log n)` |
/// | `iter` | `O(n)` in total, `O(log n)` for a single step |
///
/// # Examples
/// ```
/// # use core_collections::collections::tree::TreeMap;
/// let mut map = TreeMap::new();
/// for key in [5, 2, 8, 1, 9] {
///     map.insert(key, key * 10);
/// }
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 5, 8, 9]);
/// assert_eq!(map.floor_key(&6), Some(&5));
/// assert_eq!(map.ceiling_key(&6), Some(&8));
/// assert_eq!(map.first_key(), Some(&1));
/// assert_eq!(map.last_key(), Some(&9));
/// ```
pub struct TreeMap<K, V, C = Natural> {
    pub(crate) nodes: Vector<Node<K, V>>,
    pub(crate) free: Vector<usize>,
    pub(crate) root: usize,
    pub(crate) len: usize,
    pub(crate) comparator: C,
    pub(crate) mod_count: ModCount,
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates a new, empty TreeMap ordered by the keys' [`Ord`] implementation.
    pub fn new() -> TreeMap<K, V> {
        TreeMap::with_comparator(Natural)
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Creates a new, empty TreeMap ordered by `comparator`, which is kept for the map's lifetime.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::tree::TreeMap;
    /// # use core_collections::order::{Natural, Reversed};
    /// let mut map = TreeMap::with_comparator(Reversed(Natural));
    /// map.insert(1, "one");
    /// map.insert(3, "three");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["three", "two", "one"]);
    /// ```
    pub fn with_comparator(comparator: C) -> TreeMap<K, V, C> {
        let mut nodes = Vector::new();
        nodes.push(Node::nil());

        TreeMap {
            nodes,
            free: Vector::new(),
            root: NIL,
            len: 0,
            comparator,
            mod_count: ModCount::new(),
        }
    }

    /// Inserts the provided `key`-`value` pair, returning the previous value if the comparator
    /// considers `key` equal to a key already in the map. In that case the original key is kept.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut current = self.root;

        while current != NIL {
            parent = current;
            side = match self.comparator.compare(&key, self.nodes[current].linked().0) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let (_, existing) = self.nodes[current].linked_mut();
                    return Some(mem::replace(existing, value));
                },
            };
            current = self.nodes[current].child(side);
        }

        let node = self.alloc(key, value, parent);
        if parent == NIL {
            self.root = node;
        } else {
            self.nodes[parent].set_child(side, node);
        }

        self.len += 1;
        self.mod_count.bump();
        self.insert_fixup(node);
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Some(self.nodes[self.find(key)?].linked())
    }

    /// Returns a reference to the value associated with `key`, or None if there isn't one.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a reference to the value associated with `key`, or a [`KeyNotFound`] error.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`, or None if there isn't
    /// one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let index = self.find(key)?;
        Some(self.nodes[index].linked_mut().1)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let index = self.find(key)?;
        Some(self.delete(index))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Some(self.nodes[self.nearest(key, Side::Left, true)?].linked())
    }

    /// Returns the greatest key less than or equal to `key`.
    pub fn floor_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.floor_entry(key).map(|(key, _)| key)
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceiling_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Some(self.nodes[self.nearest(key, Side::Right, true)?].linked())
    }

    /// Returns the least key greater than or equal to `key`.
    pub fn ceiling_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.ceiling_entry(key).map(|(key, _)| key)
    }

    /// Returns the entry with the greatest key strictly less than `key`.
    pub fn lower_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Some(self.nodes[self.nearest(key, Side::Left, false)?].linked())
    }

    /// Returns the greatest key strictly less than `key`.
    pub fn lower_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.lower_entry(key).map(|(key, _)| key)
    }

    /// Returns the entry with the least key strictly greater than `key`.
    pub fn higher_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Some(self.nodes[self.nearest(key, Side::Right, false)?].linked())
    }

    /// Returns the least key strictly greater than `key`.
    pub fn higher_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.higher_entry(key).map(|(key, _)| key)
    }

    /// Finds the node holding `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            let node_key: &Q = node.linked().0.borrow();
            current = match <C as Comparator<Q>>::compare(&self.comparator, key, node_key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(current),
            };
        }
        None
    }

    /// Finds the node closest to `key` on the given side of it, the left being smaller keys.
    /// A node with an equal key is only accepted when `inclusive` is set.
    pub(crate) fn nearest<Q>(&self, key: &Q, side: Side, inclusive: bool) -> Option<usize>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut current = self.root;
        let mut best = NIL;

        while current != NIL {
            let node = &self.nodes[current];
            let node_key: &Q = node.linked().0.borrow();
            let ordering = <C as Comparator<Q>>::compare(&self.comparator, key, node_key);
            if ordering == Ordering::Equal && inclusive {
                return Some(current);
            }

            // A node on the requested side is a candidate, but a closer one may be further in.
            let candidate = match side {
                Side::Left => ordering == Ordering::Greater,
                Side::Right => ordering == Ordering::Less,
            };

            if candidate {
                best = current;
                current = node.child(side.opposite());
            } else {
                current = node.child(side);
            }
        }

        (best != NIL).then_some(best)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns the number of entries in the TreeMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the TreeMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the comparator that orders this map.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the current modification count, which changes whenever an entry is added or
    /// removed. Replacing the value of an existing key doesn't count.
    pub const fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, 0 for an empty
    /// map.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Returns the entry with the least key.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        Some(self.nodes[self.edge(Side::Left)?].linked())
    }

    /// Returns the entry with the greatest key.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        Some(self.nodes[self.edge(Side::Right)?].linked())
    }

    /// Returns the least key, or None if the map is empty.
    pub fn first_key(&self) -> Option<&K> {
        self.first_entry().map(|(key, _)| key)
    }

    /// Returns the greatest key, or None if the map is empty.
    pub fn last_key(&self) -> Option<&K> {
        self.last_entry().map(|(key, _)| key)
    }

    /// Returns the least key, or an [`EmptyCollection`] error if the map is empty.
    pub fn try_first_key(&self) -> Result<&K, EmptyCollection> {
        self.first_key().ok_or(EmptyCollection)
    }

    /// Returns the greatest key, or an [`EmptyCollection`] error if the map is empty.
    pub fn try_last_key(&self) -> Result<&K, EmptyCollection> {
        self.last_key().ok_or(EmptyCollection)
    }

    /// Removes and returns the entry with the least key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let index = self.edge(Side::Left)?;
        Some(self.delete(index))
    }

    /// Removes and returns the entry with the greatest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let index = self.edge(Side::Right)?;
        Some(self.delete(index))
    }

    /// Removes every entry. Allocated node slots are kept for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::nil());
        self.free.clear();
        self.root = NIL;
        self.len = 0;
        self.mod_count.bump();
    }

    /// Returns an iterator over all entries in ascending key order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            front: self.edge(Side::Left).unwrap_or(NIL),
            back: self.edge(Side::Right).unwrap_or(NIL),
            len: self.len,
        }
    }

    /// Returns an iterator over all keys in ascending order, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in ascending key order, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Consumes self and returns an iterator over all keys in ascending order.
    pub fn into_keys(self) -> IntoKeys<K, V, C> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all values in ascending key order.
    pub fn into_values(self) -> IntoValues<K, V, C> {
        IntoValues(self.into_iter())
    }

    /// Returns a fail-fast [`Cursor`] over the entries, in ascending key order.
    pub fn cursor(&self) -> Cursor<TreeMap<K, V, C>> {
        Cursor::new(self)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns the node at the far end of the tree on `side`, or None if the tree is empty.
    pub(crate) fn edge(&self, side: Side) -> Option<usize> {
        (self.root != NIL).then(|| extreme(&self.nodes, self.root, side))
    }

    fn height_of(&self, index: usize) -> usize {
        if index == NIL {
            return 0;
        }

        let node = &self.nodes[index];
        1 + cmp::max(self.height_of(node.left), self.height_of(node.right))
    }

    /// Places a new red node in a free slot, or at the end of the arena.
    fn alloc(&mut self, key: K, value: V, parent: usize) -> usize {
        let node = Node {
            entry: Some((key, value)),
            parent,
            left: NIL,
            right: NIL,
            color: Color::Red,
        };

        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            },
        }
    }

    /// Takes the entry out of a node that has already been unlinked, freeing its slot.
    fn release(&mut self, index: usize) -> (K, V) {
        let node = mem::replace(&mut self.nodes[index], Node::nil());
        self.free.push(index);
        node.entry.unreachable()
    }

    /// Returns which child of its parent the node at `index` is. The node must have a parent.
    fn side_of(&self, index: usize) -> Side {
        if self.nodes[self.nodes[index].parent].left == index {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points the link from `parent` to `old` at `new` instead. A parent of [`NIL`] means that
    /// `old` is the root.
    fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
    }

    /// Moves the subtree at `new` into the place of the subtree at `old`.
    fn transplant(&mut self, old: usize, new: usize) {
        let parent = self.nodes[old].parent;
        self.replace_child(parent, old, new);
        // This may set the sentinel's parent, which delete_fixup relies on.
        self.nodes[new].parent = parent;
    }

    /// Rotates the subtree at `index` towards `side`, so that its child on the opposite side
    /// takes its place.
    fn rotate(&mut self, index: usize, side: Side) {
        let opposite = side.opposite();
        let pivot = self.nodes[index].child(opposite);
        let inner = self.nodes[pivot].child(side);

        self.nodes[index].set_child(opposite, inner);
        if inner != NIL {
            self.nodes[inner].parent = index;
        }

        let parent = self.nodes[index].parent;
        self.nodes[pivot].parent = parent;
        self.replace_child(parent, index, pivot);

        self.nodes[pivot].set_child(side, index);
        self.nodes[index].parent = pivot;
    }

    /// Restores the red-black properties after `index` was inserted as a red leaf.
    fn insert_fixup(&mut self, mut index: usize) {
        while self.nodes[self.nodes[index].parent].color == Color::Red {
            // A red parent is never the root, so the grandparent exists.
            let parent = self.nodes[index].parent;
            let grandparent = self.nodes[parent].parent;
            let side = self.side_of(parent);
            let uncle = self.nodes[grandparent].child(side.opposite());

            if self.nodes[uncle].color == Color::Red {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                index = grandparent;
            } else {
                if index == self.nodes[parent].child(side.opposite()) {
                    index = parent;
                    self.rotate(index, side);
                }

                let parent = self.nodes[index].parent;
                let grandparent = self.nodes[parent].parent;
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate(grandparent, side.opposite());
            }
        }

        let root = self.root;
        self.nodes[root].color = Color::Black;
    }

    /// Unlinks the node at `index`, rebalances and returns its entry. Other nodes keep their
    /// indices, the in-order successor is moved into place rather than having its entry copied.
    pub(crate) fn delete(&mut self, index: usize) -> (K, V) {
        let mut removed_color = self.nodes[index].color;
        let replacement;

        if self.nodes[index].left == NIL {
            replacement = self.nodes[index].right;
            self.transplant(index, replacement);
        } else if self.nodes[index].right == NIL {
            replacement = self.nodes[index].left;
            self.transplant(index, replacement);
        } else {
            let successor = extreme(&self.nodes, self.nodes[index].right, Side::Left);
            removed_color = self.nodes[successor].color;
            replacement = self.nodes[successor].right;

            if self.nodes[successor].parent == index {
                self.nodes[replacement].parent = successor;
            } else {
                self.transplant(successor, replacement);
                let right = self.nodes[index].right;
                self.nodes[successor].right = right;
                self.nodes[right].parent = successor;
            }

            self.transplant(index, successor);
            let left = self.nodes[index].left;
            self.nodes[successor].left = left;
            self.nodes[left].parent = successor;
            self.nodes[successor].color = self.nodes[index].color;
        }

        if removed_color == Color::Black {
            self.delete_fixup(replacement);
        }

        self.len -= 1;
        self.mod_count.bump();
        self.release(index)
    }

    /// Restores the red-black properties after a black node was removed from above `index`,
    /// which may be the sentinel.
    fn delete_fixup(&mut self, mut index: usize) {
        while index != self.root && self.nodes[index].color == Color::Black {
            let parent = self.nodes[index].parent;
            let side = if self.nodes[parent].left == index { Side::Left } else { Side::Right };
            let opposite = side.opposite();
            let mut sibling = self.nodes[parent].child(opposite);

            if self.nodes[sibling].color == Color::Red {
                self.nodes[sibling].color = Color::Black;
                self.nodes[parent].color = Color::Red;
                self.rotate(parent, side);
                sibling = self.nodes[parent].child(opposite);
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(opposite);

            if self.nodes[near].color == Color::Black && self.nodes[far].color == Color::Black {
                self.nodes[sibling].color = Color::Red;
                index = parent;
            } else {
                if self.nodes[far].color == Color::Black {
                    self.nodes[near].color = Color::Black;
                    self.nodes[sibling].color = Color::Red;
                    self.rotate(sibling, opposite);
                    sibling = self.nodes[parent].child(opposite);
                }

                self.nodes[sibling].color = self.nodes[parent].color;
                self.nodes[parent].color = Color::Black;
                let far = self.nodes[sibling].child(opposite);
                self.nodes[far].color = Color::Black;
                self.rotate(parent, side);
                index = self.root;
            }
        }

        self.nodes[index].color = Color::Black;
    }

    fn render(&self, index: usize) -> String
    where
        K: Debug,
        V: Debug,
    {
        if index == NIL {
            return String::from("-");
        }

        let node = &self.nodes[index];
        let (key, value) = node.linked();
        let color = match node.color {
            Color::Red => 'R',
            Color::Black => 'B',
        };

        let left = self.render(node.left)
            .lines()
            .map(|line| format!("┌    {line}"))
            .collect::<Vector<_>>()
            .join("\n");
        let right = self.render(node.right)
            .lines()
            .map(|line| format!("└    {line}"))
            .collect::<Vector<_>>()
            .join("\n");

        format!("{left}\n{color}({key:?}: {value:?})\n{right}")
    }
}

#[cfg(test)]
impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Checks every red-black property, the parent links and the ordering of the keys.
    pub(crate) fn verify_red_black(&self) {
        assert_eq!(self.nodes[NIL].color, Color::Black, "The sentinel must stay black.");
        assert_eq!(self.nodes[self.root].color, Color::Black, "The root must be black.");
        if self.root != NIL {
            assert_eq!(self.nodes[self.root].parent, NIL, "The root must have no parent.");
        }

        let (count, _) = self.verify_subtree(self.root);
        assert_eq!(count, self.len, "Every entry should be reachable from the root.");
        assert_eq!(self.nodes.len() - 1 - self.free.len(), self.len);

        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(previous) = previous {
                assert_eq!(
                    self.comparator.compare(previous, key),
                    Ordering::Less,
                    "Keys should be strictly ascending."
                );
            }
            previous = Some(key);
        }
    }

    /// Returns the number of nodes in the subtree and its black height.
    fn verify_subtree(&self, index: usize) -> (usize, usize) {
        if index == NIL {
            return (0, 1);
        }

        let node = &self.nodes[index];
        for child in [node.left, node.right] {
            if child != NIL {
                assert_eq!(self.nodes[child].parent, index, "Child and parent links should agree.");
            }
        }

        if node.color == Color::Red {
            assert!(
                self.nodes[node.left].color == Color::Black
                    && self.nodes[node.right].color == Color::Black,
                "A red node can't have a red child."
            );
        }

        let (left_count, left_black) = self.verify_subtree(node.left);
        let (right_count, right_black) = self.verify_subtree(node.right);
        assert_eq!(
            left_black, right_black,
            "Every path should pass the same number of black nodes."
        );

        (left_count + right_count + 1, left_black + (node.color == Color::Black) as usize)
    }
}

impl<K, V, C> Traverse for TreeMap<K, V, C> {
    type Pos = usize;

    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    type Owned = (K, V);

    fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    fn first_pos(&self) -> Option<usize> {
        self.edge(Side::Left)
    }

    fn next_pos(&self, pos: usize) -> Option<usize> {
        let next = step(&self.nodes, pos, Side::Right);
        (next != NIL).then_some(next)
    }

    fn item_at(&self, pos: usize) -> (&K, &V) {
        self.nodes[pos].linked()
    }

    fn remove_at_pos(&mut self, pos: usize) -> ((K, V), Option<usize>) {
        // Deletion never moves the successor to another index, so it stays valid.
        let next = self.next_pos(pos);
        (self.delete(pos), next)
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TreeMap::with_comparator(C::default());
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K> + Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        TreeMap::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for TreeMap<K, V, C> {
    fn clone(&self) -> Self {
        TreeMap {
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            root: self.root,
            len: self.len,
            comparator: self.comparator.clone(),
            mod_count: ModCount::new(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K: Debug, V: Debug, C> Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMap")
            .field("nodes", &DebugRaw(format!("\n{}\n", self.render(self.root))))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug, C> Display for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
