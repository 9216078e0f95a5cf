use crate::util::option::OptionExtension;

/// The index of the shared sentinel node, which stands in for every missing child and for the
/// root's parent. It is always black and never holds an entry.
pub(crate) const NIL: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node to follow. Most of the balancing is written once in terms of a side and
/// its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// None for the sentinel and for freed slots awaiting reuse.
    pub entry: Option<(K, V)>,
    pub parent: usize,
    pub left: usize,
    pub right: usize,
    pub color: Color,
}

impl<K, V> Node<K, V> {
    pub const fn nil() -> Node<K, V> {
        Node {
            entry: None,
            parent: NIL,
            left: NIL,
            right: NIL,
            color: Color::Black,
        }
    }

    pub const fn child(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub const fn set_child(&mut self, side: Side, child: usize) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns the entry of a node that a live link points at.
    pub fn linked(&self) -> (&K, &V) {
        let (key, value) = self.entry.as_ref().unreachable();
        (key, value)
    }

    pub fn linked_mut(&mut self) -> (&K, &mut V) {
        let (key, value) = self.entry.as_mut().unreachable();
        (&*key, value)
    }
}

/// Follows `side` links from `index` as far as they go, finding the minimum (left) or maximum
/// (right) of the subtree. `index` must not be [`NIL`].
pub(crate) fn extreme<K, V>(nodes: &[Node<K, V>], mut index: usize, side: Side) -> usize {
    while nodes[index].child(side) != NIL {
        index = nodes[index].child(side);
    }
    index
}

/// Returns the in-order neighbour of `index` on the given side, the successor for
/// [`Side::Right`] and the predecessor for [`Side::Left`], or [`NIL`] if there is none.
pub(crate) fn step<K, V>(nodes: &[Node<K, V>], mut index: usize, side: Side) -> usize {
    let child = nodes[index].child(side);
    if child != NIL {
        return extreme(nodes, child, side.opposite());
    }

    let mut parent = nodes[index].parent;
    while parent != NIL && nodes[parent].child(side) == index {
        index = parent;
        parent = nodes[parent].parent;
    }
    parent
}
