use crate::util::option::OptionExtension;

/// A reference to a single element of a [`LinkedList`](super::LinkedList), returned when the
/// element is inserted.
///
/// A handle stays valid until its element is removed, no matter what else happens to the list.
/// After that, every method given the handle reports
/// [`InvalidHandle`](crate::error::InvalidHandle), even if the slot has since been reused. Using a
/// handle with a list other than the one that produced it is a logic error, which may resolve to
/// an unrelated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

/// A single arena slot. Vacant slots form a singly linked free list through `next_free`.
#[derive(Debug)]
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub generation: u64,
}

impl<T> Slot<T> {
    pub const fn node(&self) -> Option<&Node<T>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub const fn node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns the node held by a slot that a live link points at.
    pub fn linked(&self) -> &Node<T> {
        self.node().unreachable()
    }

    pub fn linked_mut(&mut self) -> &mut Node<T> {
        self.node_mut().unreachable()
    }
}
