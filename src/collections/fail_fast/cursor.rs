use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::ModCount;
use crate::error::{ConcurrentModification, CursorError, NoCurrentElement};

/// A collection that can be walked by a [`Cursor`], described in terms of opaque positions.
///
/// Positions are only meaningful for the collection that produced them and only until that
/// collection is structurally modified, [`Cursor`] enforces the latter through the [`ModCount`].
pub trait Traverse {
    /// A position of an element within the collection.
    type Pos: Copy;

    /// The borrowed form of an element that is yielded at each step.
    type Item<'a>
    where
        Self: 'a;

    /// The owned form of an element, returned when it is removed.
    type Owned;

    /// Returns the current modification count of the collection.
    fn mod_count(&self) -> ModCount;

    /// Returns the position of the first element, or None if the collection is empty.
    fn first_pos(&self) -> Option<Self::Pos>;

    /// Returns the position following `pos`, or None if `pos` is the last element.
    fn next_pos(&self, pos: Self::Pos) -> Option<Self::Pos>;

    /// Returns the element at `pos`.
    ///
    /// # Panics
    /// May panic if `pos` wasn't produced by this collection since its last modification.
    fn item_at(&self, pos: Self::Pos) -> Self::Item<'_>;

    /// Removes the element at `pos`, returning it along with the position of the element that
    /// followed it.
    fn remove_at_pos(&mut self, pos: Self::Pos) -> (Self::Owned, Option<Self::Pos>);
}

/// A fail-fast iterator which is detached from its collection. See the [module docs](super).
///
/// The collection is passed to every step, so it can be mutated between steps. Doing so through
/// anything other than [`Cursor::remove_current`] invalidates the cursor, and every later step
/// returns a [`ConcurrentModification`] error. Using a cursor with a collection other than the one
/// it was created from is a logic error.
///
/// # Examples
/// ```
/// # use core_collections::collections::contiguous::Vector;
/// let mut vec: Vector<u8> = (1..=5).collect();
/// let mut cursor = vec.cursor();
/// while let Some(item) = cursor.next(&vec).unwrap() {
///     if *item % 2 == 0 {
///         cursor.remove_current(&mut vec).unwrap();
///     }
/// }
/// assert_eq!(&*vec, &[1, 3, 5]);
/// ```
pub struct Cursor<C: Traverse> {
    pub(crate) next: Option<C::Pos>,
    pub(crate) current: Option<C::Pos>,
    pub(crate) expected: ModCount,
    pub(crate) _phantom: PhantomData<fn(&C)>,
}

impl<C: Traverse> Cursor<C> {
    /// Creates a cursor positioned before the first element of `collection`.
    pub fn new(collection: &C) -> Cursor<C> {
        Cursor {
            next: collection.first_pos(),
            current: None,
            expected: collection.mod_count(),
            _phantom: PhantomData,
        }
    }

    /// Returns the modification count this cursor expects the collection to have.
    pub const fn expected_mod_count(&self) -> ModCount {
        self.expected
    }

    /// Returns true if another call to [`next`](Cursor::next) will yield an element.
    pub fn has_next(&self, collection: &C) -> Result<bool, ConcurrentModification> {
        self.check(collection)?;
        Ok(self.next.is_some())
    }

    /// Advances the cursor, returning the next element or None if the end has been reached.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(
        &mut self,
        collection: &'a C,
    ) -> Result<Option<C::Item<'a>>, ConcurrentModification> {
        self.check(collection)?;

        match self.next {
            Some(pos) => {
                self.current = Some(pos);
                self.next = collection.next_pos(pos);
                Ok(Some(collection.item_at(pos)))
            },
            None => {
                self.current = None;
                Ok(None)
            },
        }
    }

    /// Removes the element most recently returned by [`next`](Cursor::next). The cursor adopts
    /// the collection's new modification count, so it remains valid.
    pub fn remove_current(&mut self, collection: &mut C) -> Result<C::Owned, CursorError> {
        self.check(collection)?;

        let pos = self.current.take().ok_or(NoCurrentElement)?;
        let (removed, next) = collection.remove_at_pos(pos);

        self.next = next;
        self.expected = collection.mod_count();
        Ok(removed)
    }

    pub(crate) fn check(&self, collection: &C) -> Result<(), ConcurrentModification> {
        self.expected.check(collection.mod_count())
    }
}

impl<C: Traverse> Clone for Cursor<C> {
    fn clone(&self) -> Self {
        Cursor {
            next: self.next,
            current: self.current,
            expected: self.expected,
            _phantom: PhantomData,
        }
    }
}

impl<C: Traverse> Debug for Cursor<C>
where
    C::Pos: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("next", &self.next)
            .field("current", &self.current)
            .field("expected", &self.expected)
            .finish()
    }
}
