/// A read-only view of a collection that produces values of type `T`.
///
/// A function that only reads from a collection can take `&impl Source<T>`, accepting any sequence
/// or set without being able to modify it.
pub trait Source<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements that [`iter`](Source::iter) will produce.
    fn len(&self) -> usize;

    /// Returns true if the source has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the source, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;
}

/// A write-only view of a collection that consumes values of type `T`.
pub trait Sink<T> {
    /// Adds `item` to the collection. Where it ends up depends on the collection, sequences
    /// append it while sets ignore it if an equal item is present.
    fn put(&mut self, item: T);
}

/// Puts a clone of every element of `source` into `sink`, returning the number of elements copied.
///
/// # Examples
/// ```
/// # use core_collections::collections::contiguous::Vector;
/// # use core_collections::collections::linked::LinkedList;
/// # use core_collections::collections::traits::copy_into;
/// let numbers: Vector<i32> = (1..=3).collect();
/// let mut list = LinkedList::new();
/// list.push_back(0);
///
/// assert_eq!(copy_into(&numbers, &mut list), 3);
/// assert_eq!(list.to_string(), "(0) -> (1) -> (2) -> (3)");
/// ```
pub fn copy_into<T, S, D>(source: &S, sink: &mut D) -> usize
where
    T: Clone,
    S: Source<T> + ?Sized,
    D: Sink<T> + ?Sized,
{
    let mut count = 0;
    for item in source.iter() {
        sink.put(item.clone());
        count += 1;
    }
    count
}
