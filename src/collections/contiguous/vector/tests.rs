#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::error::{ConcurrentModification, CursorError, IndexOutOfBounds, NoCurrentElement};
use crate::order::{Natural, Reversed};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_push_grows_by_doubling() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0);
    assert_eq!(vec.cap(), MIN_ALLOCATED_CAP, "The first allocation should be the minimum size.");

    for i in 1..5 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), MIN_ALLOCATED_CAP * 2, "A full Vector should double its capacity.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_remove_first_shifts_left() {
    let mut vec: Vector<_> = (1..=5).collect();

    assert_eq!(vec.remove(0), 1);
    assert_eq!(vec.len(), 4);
    assert_eq!(&*vec, &[2, 3, 4, 5], "Later elements should shift down by one.");
    assert_eq!(vec[0], 2);
}

#[test]
fn test_insert_positions() {
    let mut vec: Vector<char> = Vector::new();
    vec.insert(0, 'b');
    vec.insert(0, 'a');
    vec.insert(2, 'd');
    vec.insert(2, 'c');
    assert_eq!(&*vec, &['a', 'b', 'c', 'd']);

    assert_eq!(
        vec.try_insert(5, 'z'),
        Err(IndexOutOfBounds { index: 5, len: 4 }),
        "Inserting past the end should fail."
    );
    assert_eq!(vec.try_insert(4, 'e'), Ok(()), "Inserting at len should append.");
    assert_eq!(vec.last(), Some(&'e'));
}

#[test]
fn test_index_errors() {
    let mut vec: Vector<u8> = (0..3).collect();

    assert_eq!(vec.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_get_mut(7).map(|v| *v), Err(IndexOutOfBounds { index: 7, len: 3 }));
    assert_eq!(vec.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_replace(3, 9), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.get(3), None, "The slice form of get should return None.");

    assert_panics!({ vec.remove(3); });
    assert_panics!({ vec.replace(10, 0); });
    assert_panics!({ vec.insert(4, 0); });
    assert_eq!(&*vec, &[0, 1, 2], "Failed operations shouldn't change the Vector.");
}

#[test]
fn test_replace_keeps_mod_count() {
    let mut vec: Vector<_> = (0..3).collect();
    let before = vec.mod_count();

    assert_eq!(vec.replace(1, 10), 1);
    assert_eq!(&*vec, &[0, 10, 2]);
    assert_eq!(vec.mod_count(), before, "Replacing isn't a structural modification.");

    vec.push(3);
    assert_ne!(vec.mod_count(), before);
}

#[test]
fn test_pop_and_clear() {
    let mut vec: Vector<_> = (0..4).collect();
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.len(), 3);

    let cap = vec.cap();
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing should keep the allocation.");
    assert_eq!(vec.pop(), None, "Popping an empty Vector should return None.");
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec: Vector<u32> = Vector::with_cap(2);
    assert_eq!(vec.cap(), 2);

    vec.push(1);
    vec.reserve(10);
    assert_eq!(vec.cap(), 11, "Reserve should make room for exactly len + extra.");

    vec.reserve(3);
    assert_eq!(vec.cap(), 11, "Reserve shouldn't shrink.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 1);
    assert_eq!(&*vec, &[1]);
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::counter();
    let mut vec: Vector<CountedDrop> = (0..10).map(|_| CountedDrop::new(&counter)).collect();

    drop(vec.remove(4));
    drop(vec.pop());
    assert_eq!(counter.get(), 2);

    vec.clear();
    assert_eq!(counter.get(), 10, "Clearing should drop every element.");

    vec.push(CountedDrop::new(&counter));
    vec.push(CountedDrop::new(&counter));
    drop(vec);
    assert_eq!(counter.get(), 12, "Dropping should drop every remaining element.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.remove(50), ZeroSizedType);
    assert_eq!(vec.iter().count(), 99);
}

#[test]
fn test_sort_and_index_of() {
    let mut vec: Vector<_> = [5, 2, 8, 1, 9].into_iter().collect();
    let before = vec.mod_count();

    vec.sort_with(&Natural);
    assert_eq!(&*vec, &[1, 2, 5, 8, 9]);
    assert_ne!(vec.mod_count(), before, "Sorting should count as a modification.");

    vec.sort_with(&Reversed(Natural));
    assert_eq!(&*vec, &[9, 8, 5, 2, 1]);
    assert_eq!(vec.index_of(&5), Some(2));
    assert_eq!(vec.index_of(&4), None);
}

#[test]
fn test_into_iter_both_ends() {
    let vec: Vector<_> = (0..6).collect();
    let mut iter = vec.into_iter();

    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(&*iter.collect::<Vector<_>>(), &[1, 2, 3, 4]);
}

#[test]
fn test_display_and_debug() {
    let vec: Vector<_> = (1..=3).collect();
    assert_eq!(format!("{vec}"), "![1, 2, 3]");

    let mut vec = vec;
    vec.pop();
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 3 }");
}

#[test]
fn test_clone_is_independent() {
    let vec: Vector<String> = ["a", "b"].into_iter().map(String::from).collect();
    let mut other = vec.clone();
    other.push(String::from("c"));

    assert_eq!(vec.len(), 2);
    assert_eq!(other.len(), 3);
    assert_ne!(vec, other);
}

#[test]
fn test_cursor_remove_current() {
    let mut vec: Vector<_> = (1..=6).collect();
    let mut cursor = vec.cursor();
    let mut seen = Vector::new();

    while let Some(item) = cursor.next(&vec).unwrap() {
        seen.push(*item);
        if *item % 3 == 0 {
            cursor.remove_current(&mut vec).unwrap();
        }
    }

    assert_eq!(&*seen, &[1, 2, 3, 4, 5, 6], "Removal shouldn't skip elements.");
    assert_eq!(&*vec, &[1, 2, 4, 5]);
}

#[test]
fn test_cursor_detects_modification() {
    let mut vec: Vector<_> = (0..3).collect();
    let mut cursor = vec.cursor();

    assert_eq!(cursor.next(&vec), Ok(Some(&0)));
    vec.push(3);

    assert!(
        matches!(cursor.next(&vec), Err(ConcurrentModification { .. })),
        "A push behind the cursor's back should be detected."
    );
    assert!(matches!(
        cursor.remove_current(&mut vec),
        Err(CursorError::ConcurrentModification(_))
    ));
}

#[test]
fn test_cursor_remove_without_current() {
    let mut vec: Vector<_> = (0..3).collect();
    let mut cursor = vec.cursor();

    assert_eq!(
        cursor.remove_current(&mut vec),
        Err(CursorError::NoCurrentElement(NoCurrentElement))
    );

    cursor.next(&vec).unwrap();
    assert_eq!(cursor.remove_current(&mut vec), Ok(0));
    assert_eq!(
        cursor.remove_current(&mut vec),
        Err(CursorError::NoCurrentElement(NoCurrentElement)),
        "Removing twice in a row should fail."
    );
    assert_eq!(&*vec, &[1, 2]);
}

proptest! {
    #[test]
    fn prop_matches_std_vec(ops in prop::collection::vec((0..4u8, any::<i32>(), any::<usize>()), 0..200)) {
        let mut vec = Vector::new();
        let mut model = Vec::new();

        for (op, value, index) in ops {
            match op {
                0 => {
                    vec.push(value);
                    model.push(value);
                },
                1 => {
                    prop_assert_eq!(vec.pop(), model.pop());
                },
                2 => {
                    let index = index % (model.len() + 1);
                    vec.insert(index, value);
                    model.insert(index, value);
                },
                _ => if !model.is_empty() {
                    let index = index % model.len();
                    prop_assert_eq!(vec.remove(index), model.remove(index));
                },
            }

            prop_assert_eq!(&*vec, &model[..]);
        }
    }
}
