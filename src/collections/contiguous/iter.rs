use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use super::{Array, Vector};

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.size();
        IntoIter {
            buf: self.forget_init(),
            start: 0,
            end,
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, end) = self.into_parts();
        IntoIter {
            buf,
            start: 0,
            end,
        }
    }
}

/// An owned iterator over an [`Array`] or [`Vector`]. See [`Array::into_iter`] and
/// [`Vector::into_iter`].
///
/// Only the values in `start..end` are initialized, everything else has either been moved out or
/// was never written.
pub struct IntoIter<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the value is initialized. Incrementing start afterwards means
        // that it will never be read or dropped again.
        let value = unsafe { self.buf[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: end was greater than start before being decremented, so the value is
        // initialized and now sits outside of start..end.
        Some(unsafe { self.buf[self.end].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: All values in start..end are initialized and haven't been moved out.
            unsafe { self.buf[i].assume_init_drop() }
        }
        // buf only holds MaybeUninit values, so dropping it just frees the allocation.
    }
}
