use std::cmp::Ordering;

use super::Comparator;
use crate::collections::contiguous::Vector;

/// Runs shorter than this are sorted with insertion sort before being merged.
const INSERTION_THRESHOLD: usize = 16;

/// Sorts `slice` in place with a stable merge sort, ordered by `comparator`. Elements that compare
/// equal keep their relative order.
///
/// Each merge records the merged order as indices in a scratch [`Vector`] and then moves the
/// elements into place by following permutation cycles, so every element moves a constant number
/// of times per merge. The whole sort takes `O(n log n)` comparisons and moves, plus `O(n)`
/// scratch space.
///
/// # Examples
/// ```
/// # use core_collections::order::{self, Natural, Reversed};
/// let mut nums = [5, 2, 8, 1, 9];
/// order::sort(&mut nums, &Natural);
/// assert_eq!(nums, [1, 2, 5, 8, 9]);
///
/// order::sort(&mut nums, &Reversed(Natural));
/// assert_eq!(nums, [9, 8, 5, 2, 1]);
/// ```
pub fn sort<T, C: Comparator<T> + ?Sized>(slice: &mut [T], comparator: &C) {
    if slice.len() <= INSERTION_THRESHOLD {
        insertion_sort(slice, comparator);
        return;
    }

    let mut scratch = Vector::with_cap(slice.len());
    merge_sort(slice, comparator, &mut scratch);
}

/// Returns true if every element of `slice` is less than or equal to the one after it.
pub fn is_sorted<T, C: Comparator<T> + ?Sized>(slice: &[T], comparator: &C) -> bool {
    slice.windows(2).all(|pair| comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Returns the greatest item, or None if `iter` is empty. Of several equally great items, the last
/// is returned.
///
/// # Examples
/// ```
/// # use core_collections::order::{self, Natural};
/// assert_eq!(order::max_by([3, 7, 2], &Natural), Some(7));
/// assert_eq!(order::max_by(Vec::<u8>::new(), &Natural), None);
/// ```
pub fn max_by<I, C>(iter: I, comparator: &C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Comparator<I::Item> + ?Sized,
{
    iter.into_iter().reduce(|max, item| match comparator.compare(&item, &max) {
        Ordering::Less => max,
        _ => item,
    })
}

/// Returns the least item, or None if `iter` is empty. Of several equally small items, the first
/// is returned.
pub fn min_by<I, C>(iter: I, comparator: &C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Comparator<I::Item> + ?Sized,
{
    iter.into_iter().reduce(|min, item| match comparator.compare(&item, &min) {
        Ordering::Less => item,
        _ => min,
    })
}

fn insertion_sort<T, C: Comparator<T> + ?Sized>(slice: &mut [T], comparator: &C) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && comparator.compare(&slice[j - 1], &slice[j]) == Ordering::Greater {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn merge_sort<T, C: Comparator<T> + ?Sized>(
    slice: &mut [T],
    comparator: &C,
    scratch: &mut Vector<usize>,
) {
    if slice.len() <= INSERTION_THRESHOLD {
        insertion_sort(slice, comparator);
        return;
    }

    let mid = slice.len() / 2;
    merge_sort(&mut slice[..mid], comparator, scratch);
    merge_sort(&mut slice[mid..], comparator, scratch);
    merge(slice, mid, comparator, scratch);
}

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]`. A right-hand element only goes first
/// when it is strictly less, which keeps equal elements in their original order.
fn merge<T, C: Comparator<T> + ?Sized>(
    slice: &mut [T],
    mid: usize,
    comparator: &C,
    order: &mut Vector<usize>,
) {
    order.clear();

    let (mut left, mut right) = (0, mid);
    while left < mid && right < slice.len() {
        if comparator.compare(&slice[right], &slice[left]) == Ordering::Less {
            order.push(right);
            right += 1;
        } else {
            order.push(left);
            left += 1;
        }
    }
    order.extend(left..mid);
    order.extend(right..slice.len());

    permute(slice, order);
}

/// Rearranges `slice` so that position `i` holds the element previously at `order[i]`. `order` is
/// left as the identity permutation.
fn permute<T>(slice: &mut [T], order: &mut [usize]) {
    for start in 0..slice.len() {
        let mut current = start;
        while order[current] != current {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }

            slice.swap(current, next);
            current = next;
        }
    }
}
