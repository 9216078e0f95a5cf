use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{LinkedList, Slot};

/// A borrowing iterator over a [`LinkedList`], see [`LinkedList::iter`].
pub struct Iter<'a, T> {
    pub(crate) slots: &'a [Slot<T>],
    pub(crate) front: Option<usize>,
    pub(crate) back: Option<usize>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.slots[self.front?].linked();
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.slots[self.back?].linked();
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// A mutable borrowing iterator over a [`LinkedList`], see [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    pub(crate) slots: NonNull<Slot<T>>,
    pub(crate) slot_count: usize,
    pub(crate) front: Option<usize>,
    pub(crate) back: Option<usize>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(
        slots: &'a mut [Slot<T>],
        front: Option<usize>,
        back: Option<usize>,
        len: usize,
    ) -> IterMut<'a, T> {
        IterMut {
            slot_count: slots.len(),
            slots: NonNull::from(slots).cast(),
            front,
            back,
            len,
            _phantom: PhantomData,
        }
    }

    /// # Safety
    /// `index` must be a linked slot that hasn't been yielded by this iterator yet.
    unsafe fn slot(&mut self, index: usize) -> &'a mut Slot<T> {
        assert!(index < self.slot_count);
        // SAFETY: The pointer came from a mutable borrow of slot_count slots, which lives for 'a.
        // Each linked slot is yielded once, so no two mutable references to it exist.
        unsafe { self.slots.add(index).as_mut() }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let index = self.front?;
        // SAFETY: front is linked and len > 0, so it hasn't been yielded from either end.
        let node = unsafe { self.slot(index) }.linked_mut();
        self.front = node.next;
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let index = self.back?;
        // SAFETY: back is linked and len > 0, so it hasn't been yielded from either end.
        let node = unsafe { self.slot(index) }.linked_mut();
        self.back = node.prev;
        self.len -= 1;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over a [`LinkedList`], which pops elements from either end.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
