use std::cmp::Ordering;

/// A total ordering over values of `T`, which may differ from `T`'s own [`Ord`] implementation, or
/// exist where `T` has none.
///
/// Every closure of the form `Fn(&T, &T) -> Ordering` is a Comparator. [`Reversed`] and [`Then`]
/// combine existing comparators.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use core_collections::order::{Comparator, Natural, Reversed};
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
///
/// let descending = Reversed(Natural);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the order of the contained comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Compares with the first comparator, then the second if the first reports equality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Then<A, B>(pub A, pub B);

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Then<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}

/// Returns a comparator which orders values by a key extracted from each one.
///
/// # Examples
/// ```
/// # use core_collections::order;
/// let mut words = ["pear", "fig", "banana"];
/// order::sort(&mut words, &order::by_key(|w: &&str| w.len()));
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn by_key<T: ?Sized, K: Ord, F: Fn(&T) -> K>(key: F) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
