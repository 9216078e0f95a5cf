use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Node, NodeHandle, Slot};
use crate::collections::contiguous::Vector;
use crate::collections::fail_fast::{Cursor, ModCount, Traverse};
use crate::collections::traits::{Sink, Source};
use crate::error::{EmptyCollection, IndexOutOfBounds, InvalidHandle};
use crate::util::fmt::{DebugIter, join_debug};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions, stored in an arena.
///
/// Nodes live in a [`Vector`] of slots and link to each other by index, so the list owns every
/// node outright and the links are plain positions. Removed slots are reused by later insertions.
/// Inserting returns a [`NodeHandle`], which allows `O(1)` insertion and removal next to that
/// element for as long as it remains in the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(1)` |
/// | `insert_after/before` | `O(1)`* |
/// | `remove` | `O(1)` |
/// | `get_at` | `O(min(i, n-i))` |
/// | `insert_at` | `O(min(i, n-i))` |
/// | `remove_at` | `O(min(i, n-i))` |
/// | `append` | `O(m)`** |
/// | `contains` | `O(n)` |
///
/// \* Amortized, the arena may need to grow.
///
/// \** Where `m` is the length of the other list, whose nodes have to move into this arena.
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because every `O(i)` or `O(n)` operation jumps
/// around the arena. For this reason, [`Vector`] should be preferred for most applications unless
/// the handle-based `O(1)` methods are being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) slots: Vector<Slot<T>>,
    pub(crate) free: Option<usize>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) len: usize,
    pub(crate) next_generation: u64,
    pub(crate) mod_count: ModCount,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            slots: Vector::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
            next_generation: 0,
            mod_count: ModCount::new(),
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current modification count, which changes whenever an element is added or
    /// removed.
    pub const fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let index = self.head?;
        Some(&mut self.node_mut(index).value)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let index = self.tail?;
        Some(&mut self.node_mut(index).value)
    }

    /// Returns a reference to the first element in the list, or an error if the list is empty.
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element in the list, or an error if the list is empty.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.back().ok_or(EmptyCollection)
    }

    /// Returns a handle to the first element in the list, if it exists.
    pub fn front_handle(&self) -> Option<NodeHandle> {
        self.head.map(|index| self.handle_of(index))
    }

    /// Returns a handle to the last element in the list, if it exists.
    pub fn back_handle(&self) -> Option<NodeHandle> {
        self.tail.map(|index| self.handle_of(index))
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeHandle {
        let index = self.link_between(None, self.head, value);
        self.handle_of(index)
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        let index = self.link_between(self.tail, None, value);
        self.handle_of(index)
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|index| self.unlink(index))
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|index| self.unlink(index))
    }

    /// Removes the first element from the list and returns it, or returns an error if the list is
    /// empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Removes the last element from the list and returns it, or returns an error if the list is
    /// empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element referred to by `handle`, or None if it has been removed.
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let index = self.resolve(handle).ok()?;
        Some(&self.node(index).value)
    }

    /// Returns a mutable reference to the element referred to by `handle`, or None if it has been
    /// removed.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let index = self.resolve(handle).ok()?;
        Some(&mut self.node_mut(index).value)
    }

    /// Returns the handle of the element after the one referred to by `handle`. Returns None if
    /// `handle` is the back of the list or no longer valid.
    pub fn next_handle(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let index = self.resolve(handle).ok()?;
        self.node(index).next.map(|next| self.handle_of(next))
    }

    /// Returns the handle of the element before the one referred to by `handle`. Returns None if
    /// `handle` is the front of the list or no longer valid.
    pub fn prev_handle(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let index = self.resolve(handle).ok()?;
        self.node(index).prev.map(|prev| self.handle_of(prev))
    }

    /// Inserts `value` directly after the element referred to by `handle`, returning a handle to
    /// the new element.
    ///
    /// # Panics
    /// Panics if `handle` doesn't refer to an element of this list.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// let first = list.push_back("a");
    /// list.push_back("c");
    /// list.insert_after(first, "b");
    /// assert_eq!(list.to_string(), "(\"a\") -> (\"b\") -> (\"c\")");
    /// ```
    pub fn insert_after(&mut self, handle: NodeHandle, value: T) -> NodeHandle {
        self.try_insert_after(handle, value).throw()
    }

    /// Inserts `value` directly after the element referred to by `handle`, or returns an error if
    /// the handle isn't valid.
    pub fn try_insert_after(
        &mut self,
        handle: NodeHandle,
        value: T,
    ) -> Result<NodeHandle, InvalidHandle> {
        let index = self.resolve(handle)?;
        let next = self.node(index).next;
        let new = self.link_between(Some(index), next, value);
        Ok(self.handle_of(new))
    }

    /// Inserts `value` directly before the element referred to by `handle`, returning a handle to
    /// the new element.
    ///
    /// # Panics
    /// Panics if `handle` doesn't refer to an element of this list.
    pub fn insert_before(&mut self, handle: NodeHandle, value: T) -> NodeHandle {
        self.try_insert_before(handle, value).throw()
    }

    /// Inserts `value` directly before the element referred to by `handle`, or returns an error if
    /// the handle isn't valid.
    pub fn try_insert_before(
        &mut self,
        handle: NodeHandle,
        value: T,
    ) -> Result<NodeHandle, InvalidHandle> {
        let index = self.resolve(handle)?;
        let prev = self.node(index).prev;
        let new = self.link_between(prev, Some(index), value);
        Ok(self.handle_of(new))
    }

    /// Removes the element referred to by `handle` and returns it. The handle, and any copies of
    /// it, become invalid.
    ///
    /// # Panics
    /// Panics if `handle` doesn't refer to an element of this list.
    pub fn remove(&mut self, handle: NodeHandle) -> T {
        self.try_remove(handle).throw()
    }

    /// Removes the element referred to by `handle`, or returns an error if the handle isn't valid.
    pub fn try_remove(&mut self, handle: NodeHandle) -> Result<T, InvalidHandle> {
        let index = self.resolve(handle)?;
        Ok(self.unlink(index))
    }

    /// Returns a handle to the element at the provided `index`, if it is in bounds.
    pub fn handle_at(&self, index: usize) -> Option<NodeHandle> {
        (index < self.len).then(|| self.handle_of(self.seek(index)))
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_at(&self, index: usize) -> &T {
        self.try_get_at(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let pos = self.checked_seek(index)?;
        Ok(&self.node(pos).value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_at_mut(&mut self, index: usize) -> &mut T {
        self.try_get_at_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let pos = self.checked_seek(index)?;
        Ok(&mut self.node_mut(pos).value)
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back by one.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert_at(&mut self, index: usize, value: T) -> NodeHandle {
        self.try_insert_at(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, or returns an error if `index` is greater
    /// than the length of the LinkedList.
    pub fn try_insert_at(
        &mut self,
        index: usize,
        value: T,
    ) -> Result<NodeHandle, IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        let new = if index == self.len {
            self.link_between(self.tail, None, value)
        } else {
            let next = self.seek(index);
            let prev = self.node(next).prev;
            self.link_between(prev, Some(next), value)
        };

        Ok(self.handle_of(new))
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes the element at `index` and returns it, or returns an error if `index` is out of
    /// bounds.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let pos = self.checked_seek(index)?;
        Ok(self.unlink(pos))
    }

    /// Moves every element of `other` onto the back of this list. Handles into `other` don't
    /// carry over.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        self.slots.reserve(other.len.saturating_sub(self.free_count()));

        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Removes every element. Handles given out before clearing are all invalidated.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.mod_count.bump();
    }

    /// Returns an iterator over the elements, front to back. The iterator is double-ended.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            len: self.len,
        }
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots, self.head, self.tail, self.len)
    }

    /// Returns a fail-fast [`Cursor`] positioned before the first element.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (1..=4).collect();
    /// let mut cursor = list.cursor();
    /// cursor.next(&list).unwrap();
    ///
    /// list.push_back(5);
    /// assert!(cursor.next(&list).is_err());
    /// ```
    pub fn cursor(&self) -> Cursor<LinkedList<T>> {
        Cursor::new(self)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        self.slots[index].linked()
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index].linked_mut()
    }

    pub(crate) fn handle_of(&self, index: usize) -> NodeHandle {
        NodeHandle {
            index,
            generation: self.node(index).generation,
        }
    }

    /// Turns a handle back into an arena index, checking that the node it was made for is still
    /// in its slot.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Result<usize, InvalidHandle> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied(node)) if node.generation == handle.generation => Ok(handle.index),
            _ => Err(InvalidHandle),
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<usize, IndexOutOfBounds> {
        if index < self.len {
            Ok(self.seek(index))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Walks to `index` from whichever end is closer. `index` must be less than `len`.
    pub(crate) fn seek(&self, index: usize) -> usize {
        if index < self.len / 2 {
            let mut pos = self.head.unreachable();
            for _ in 0..index {
                pos = self.node(pos).next.unreachable();
            }
            pos
        } else {
            let mut pos = self.tail.unreachable();
            for _ in index..self.len - 1 {
                pos = self.node(pos).prev.unreachable();
            }
            pos
        }
    }

    /// Places a new node holding `value` between `prev` and `next`, which must be adjacent (or the
    /// matching end of the list when None).
    pub(crate) fn link_between(
        &mut self,
        prev: Option<usize>,
        next: Option<usize>,
        value: T,
    ) -> usize {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);

        let slot = Slot::Occupied(Node {
            value,
            prev,
            next,
            generation,
        });

        let index = match self.free {
            Some(index) => {
                let Slot::Vacant { next_free } = self.slots[index] else {
                    unreachable!()
                };
                self.free = next_free;
                self.slots[index] = slot;
                index
            },
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            },
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = Some(index),
            None => self.head = Some(index),
        }
        match next {
            Some(next) => self.node_mut(next).prev = Some(index),
            None => self.tail = Some(index),
        }

        self.len += 1;
        self.mod_count.bump();
        index
    }

    /// Detaches the node at `index` from its neighbours and frees its slot.
    pub(crate) fn unlink(&mut self, index: usize) -> T {
        let vacant = Slot::Vacant { next_free: self.free };
        let node = match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        };
        self.free = Some(index);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        self.mod_count.bump();
        node.value
    }

    fn free_count(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Walks the list in both directions, checking that every link has a matching back-link.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head;

        while let Some(index) = curr {
            let node = self.node(index);
            assert_eq!(node.prev, prev, "Node {index} should link back to its predecessor.");
            prev = curr;
            curr = node.next;
            count += 1;
        }

        assert_eq!(self.tail, prev, "Walking from the head should end at the tail.");
        assert_eq!(count, self.len, "Walking from the head should take len steps.");
    }
}

impl<T> Traverse for LinkedList<T> {
    type Pos = usize;

    type Item<'a> = &'a T where Self: 'a;

    type Owned = T;

    fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    fn first_pos(&self) -> Option<usize> {
        self.head
    }

    fn next_pos(&self, pos: usize) -> Option<usize> {
        self.node(pos).next
    }

    fn item_at(&self, pos: usize) -> &T {
        &self.node(pos).value
    }

    fn remove_at_pos(&mut self, pos: usize) -> (T, Option<usize>) {
        let next = self.node(pos).next;
        (self.unlink(pos), next)
    }
}

impl<T> Source<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn iter<'a>(&'a self) -> Iter<'a, T>
    where
        T: 'a,
    {
        LinkedList::iter(self)
    }
}

impl<T> Sink<T> for LinkedList<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get_at(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_at_mut(index)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", join_debug(self.iter(), ") -> ("))
    }
}
