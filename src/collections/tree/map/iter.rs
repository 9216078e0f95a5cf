use std::iter::FusedIterator;

use super::{Node, Side, TreeMap, step};

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A type for owned iteration over a [`TreeMap`] in ascending key order. Produces values of type
/// `(K, V)`.
///
/// Each step removes the first or last entry from the consumed map, taking `O(log n)`.
pub struct IntoIter<K, V, C>(pub(crate) TreeMap<K, V, C>);

impl<K, V, C> Iterator for IntoIter<K, V, C> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<K, V, C> DoubleEndedIterator for IntoIter<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_last()
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> {}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over a [`TreeMap`] in ascending key order. Produces values of
/// type `(&K, &V)`.
///
/// See [`TreeMap::iter`].
pub struct Iter<'a, K, V> {
    pub(crate) nodes: &'a [Node<K, V>],
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let nodes = self.nodes;
        let current = self.front;
        self.front = step(nodes, current, Side::Right);
        self.len -= 1;
        Some(nodes[current].linked())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let nodes = self.nodes;
        let current = self.back;
        self.back = step(nodes, current, Side::Left);
        self.len -= 1;
        Some(nodes[current].linked())
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// A type for borrowed iteration over a [`TreeMap`]'s keys in ascending order. Produces values of
/// type `&K`.
///
/// See [`TreeMap::keys`].
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys(self.0.clone())
    }
}

/// A type for borrowed iteration over a [`TreeMap`]'s values in ascending key order. Produces
/// values of type `&V`.
///
/// See [`TreeMap::values`].
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A type for owned iteration over a [`TreeMap`]'s keys in ascending order. Produces values of
/// type `K`.
///
/// See [`TreeMap::into_keys`].
pub struct IntoKeys<K, V, C>(pub(crate) IntoIter<K, V, C>);

impl<K, V, C> Iterator for IntoKeys<K, V, C> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for IntoKeys<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(key, _)| key)
    }
}

impl<K, V, C> ExactSizeIterator for IntoKeys<K, V, C> {}

impl<K, V, C> FusedIterator for IntoKeys<K, V, C> {}

/// A type for owned iteration over a [`TreeMap`]'s values in ascending key order. Produces values
/// of type `V`.
///
/// See [`TreeMap::into_values`].
pub struct IntoValues<K, V, C>(pub(crate) IntoIter<K, V, C>);

impl<K, V, C> Iterator for IntoValues<K, V, C> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for IntoValues<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, value)| value)
    }
}

impl<K, V, C> ExactSizeIterator for IntoValues<K, V, C> {}

impl<K, V, C> FusedIterator for IntoValues<K, V, C> {}
