use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::collections::fail_fast::{Cursor, ModCount, Traverse};
use crate::collections::traits::{Sink, Source};
use crate::error::IndexOutOfBounds;
use crate::order::{self, Comparator};
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// The capacity of the first allocation made by a Vector that had none.
pub(crate) const MIN_ALLOCATED_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// The capacity only grows on its own, doubling whenever a push or insert finds the Vector full.
/// It never shrinks unless [`shrink_to_fit`](Vector::shrink_to_fit) is called.
///
/// Methods that take an index come in two flavours: the plain form panics when the index is out
/// of bounds, while the `try_` form returns an [`IndexOutOfBounds`] error.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `index_of` | `O(n)` |
/// | `sort_with` | `O(n log n)`*** |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
/// Amortized over many pushes, the cost is `O(1)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
///
/// \*** Comparisons and moves, with `O(n)` scratch space, see [`order::sort`].
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) mod_count: ModCount,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
            mod_count: ModCount::new(),
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
            mod_count: ModCount::new(),
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current modification count, which changes whenever an element is added or
    /// removed.
    pub const fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
        self.mod_count.bump();
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.mod_count.bump();
        // SAFETY: The value at the old len - 1 is initialized, and now sits outside of 0..len so it
        // won't be read or dropped again.
        Some(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, or returns an error if the index is greater
    /// than the length of the Vector. The value is dropped in the error case.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // Write the value to the end, then rotate it into place. Rotating MaybeUninit values is
        // a plain move of bytes.
        self.arr[self.len] = MaybeUninit::new(value);
        self.arr[index..=self.len].rotate_right(1);

        self.len += 1;
        self.mod_count.bump();
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, or returns an error if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // Move the removed value to the end of the initialized range, then take it from there.
        self.arr[index..self.len].rotate_left(1);
        self.len -= 1;
        self.mod_count.bump();

        // SAFETY: The value that was at index is now at the old len - 1, which is initialized and
        // has just been excluded from 0..len.
        Ok(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Replaces the element at `index` with `new_value`, returning the old value. This isn't a
    /// structural modification.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, or returns an error if it is out of
    /// bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], new_value))
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds. See also
    /// [`slice::get`] (through Deref) for a version returning an [`Option`].
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, or an error if it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop leaks the rest rather than double dropping.
        self.len = 0;
        self.mod_count.bump();

        // SAFETY: All values in 0..len are initialized and no longer reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Increases the capacity so that at least `extra` more elements fit without reallocation.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).expect("Capacity overflow!");

        if new_cap > self.cap() {
            self.arr.realloc(new_cap);
        }
    }

    /// Reduces the capacity to the length of the Vector.
    pub fn shrink_to_fit(&mut self) {
        self.arr.realloc(self.len);
    }

    /// Sorts the Vector with a stable merge sort, ordering elements with `comparator`. Sorting
    /// counts as a structural modification.
    pub fn sort_with<C: Comparator<T>>(&mut self, comparator: &C) {
        order::sort(self, comparator);
        self.mod_count.bump();
    }

    /// Returns a fail-fast [`Cursor`] positioned before the first element.
    pub fn cursor(&self) -> Cursor<Vector<T>> {
        Cursor::new(self)
    }
}

impl<T: PartialEq> Vector<T> {
    /// Returns the index of the first element equal to `value`, found with a linear scan.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::contiguous::Vector;
    /// let vec: Vector<_> = [1, 2, 3, 2].into_iter().collect();
    /// assert_eq!(vec.index_of(&2), Some(1));
    /// assert_eq!(vec.index_of(&7), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Vector<T> {
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).expect("Capacity overflow!"),
            MIN_ALLOCATED_CAP,
        );

        self.arr.realloc(new_cap);
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Splits the Vector into its backing Array and length without dropping any elements.
    pub(crate) fn into_parts(self) -> (Array<MaybeUninit<T>>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        let len = this.len;
        (mem::take(&mut this.arr), len)
    }
}

impl<T> Traverse for Vector<T> {
    type Pos = usize;

    type Item<'a> = &'a T where Self: 'a;

    type Owned = T;

    fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    fn first_pos(&self) -> Option<usize> {
        (!self.is_empty()).then_some(0)
    }

    fn next_pos(&self, pos: usize) -> Option<usize> {
        (pos + 1 < self.len).then_some(pos + 1)
    }

    fn item_at(&self, pos: usize) -> &T {
        &self[pos]
    }

    fn remove_at_pos(&mut self, pos: usize) -> (T, Option<usize>) {
        let removed = self.remove(pos);
        // Everything after pos has shifted left, so the next element is now at pos.
        (removed, (pos < self.len).then_some(pos))
    }
}

impl<T> Source<T> for Vector<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn iter<'a>(&'a self) -> slice::Iter<'a, T>
    where
        T: 'a,
    {
        // Vector has no inherent iter, so go through the slice directly.
        <[T]>::iter(self)
    }
}

impl<T> Sink<T> for Vector<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        value.shrink_to_fit();
        let (arr, _) = value.into_parts();

        // SAFETY: After shrinking, every element of the Array is one of the initialized values.
        unsafe { arr.assume_init() }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values in 0..len are initialized and owned by the Vector. The Array only
        // holds MaybeUninit values, so it just frees the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                self.len,
            ));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Reinterpret *mut MaybeUninit<T> as *mut T for all values < len, which are
        // initialized.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, with exclusive access guaranteed by the mutable borrow.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
