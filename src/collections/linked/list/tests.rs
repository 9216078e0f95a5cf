#![cfg(test)]

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;
use crate::error::{EmptyCollection, IndexOutOfBounds, InvalidHandle};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop_ends() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    list.verify_double_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    list.verify_double_links();

    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.try_pop_front(), Err(EmptyCollection));
    assert_eq!(list.try_pop_back(), Err(EmptyCollection));
    assert_eq!(list.try_front(), Err(EmptyCollection), "An empty list has no first element.");
    assert_eq!(list.try_back(), Err(EmptyCollection));
}

#[test]
fn test_first_and_last_names() {
    let list: LinkedList<_> = ["Ada", "Grace", "Linus"].into_iter().collect();

    assert_eq!(list.try_front(), Ok(&"Ada"));
    assert_eq!(list.try_back(), Ok(&"Linus"));
}

#[test]
fn test_handles_insert_and_remove() {
    let mut list = LinkedList::new();
    let a = list.push_back('a');
    let c = list.push_back('c');

    let b = list.insert_after(a, 'b');
    list.insert_before(a, '_');
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<String>(), "_abc");

    assert_eq!(list.get(b), Some(&'b'));
    assert_eq!(list.next_handle(b), Some(c));
    assert_eq!(list.prev_handle(b), Some(a));
    assert_eq!(list.next_handle(c), None, "The back has no next element.");

    assert_eq!(list.remove(b), 'b');
    list.verify_double_links();
    assert_eq!(list.next_handle(a), Some(c));
    assert_eq!(list.iter().copied().collect::<String>(), "_ac");
}

#[test]
fn test_stale_handles() {
    let mut list = LinkedList::new();
    let old = list.push_back(1);
    list.remove(old);

    let new = list.push_back(2);
    assert_eq!(new.index, old.index, "The freed slot should be reused.");
    assert_ne!(new, old);

    assert_eq!(list.get(old), None, "A removed element's handle shouldn't resolve.");
    assert_eq!(list.try_remove(old), Err(InvalidHandle));
    assert_eq!(list.try_insert_after(old, 3), Err(InvalidHandle));
    assert_eq!(list.try_insert_before(old, 3), Err(InvalidHandle));
    assert_panics!({ list.remove(old); });

    list.clear();
    let after_clear = list.push_back(4);
    assert_eq!(list.get(new), None, "Clearing should invalidate every handle.");
    assert_eq!(list.get(after_clear), Some(&4));
}

#[test]
fn test_index_operations() {
    let mut list: LinkedList<_> = (0..6).collect();

    assert_eq!(list[0], 0);
    assert_eq!(list[4], 4);
    assert_eq!(list.get_at(5), &5);
    assert_eq!(list.try_get_at(6), Err(IndexOutOfBounds { index: 6, len: 6 }));

    list.insert_at(3, 30);
    list.insert_at(0, -1);
    list.insert_at(list.len(), 60);
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [-1, 0, 1, 2, 30, 3, 4, 5, 60]);

    assert_eq!(list.remove_at(4), 30);
    assert_eq!(list.try_remove_at(8), Err(IndexOutOfBounds { index: 8, len: 8 }));
    assert_eq!(list.try_insert_at(9, 0), Err(IndexOutOfBounds { index: 9, len: 8 }));

    list[1] = 100;
    assert_eq!(list.handle_at(1).and_then(|h| list.get(h)), Some(&100));
    assert_eq!(list.handle_at(8), None);
}

#[test]
fn test_iter_both_directions() {
    let list: LinkedList<_> = (1..=5).collect();

    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), [&2, &3, &4], "Both ends should meet in the middle.");
}

#[test]
fn test_iter_mut() {
    let mut list: LinkedList<_> = (1..=4).collect();
    for value in list.iter_mut() {
        *value *= 10;
    }

    let mut iter = list.iter_mut();
    *iter.next_back().unwrap() += 1;
    assert_eq!(iter.len(), 3);

    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30, 41]);
}

#[test]
fn test_contains_and_index_of() {
    let list: LinkedList<_> = ["x", "y", "z", "y"].into_iter().collect();

    assert!(list.contains(&"z"));
    assert!(!list.contains(&"w"));
    assert_eq!(list.index_of(&"y"), Some(1));
    assert_eq!(list.index_of(&"w"), None);
}

#[test]
fn test_append() {
    let mut list: LinkedList<_> = (0..3).collect();
    let other: LinkedList<_> = (3..6).collect();

    list.append(other);
    list.verify_double_links();
    assert_eq!(list.len(), 6);
    assert_eq!(list, (0..6).collect::<LinkedList<_>>());

    list.append(LinkedList::new());
    assert_eq!(list.len(), 6, "Appending an empty list should change nothing.");
}

#[test]
fn test_remove_after_insert_round_trip() {
    let mut list: LinkedList<_> = (0..4).collect();
    let before = list.clone();

    let handle = list.insert_at(2, 99);
    list.remove(handle);

    assert_eq!(list, before);
    assert_eq!(list.len(), before.len());
}

#[test]
fn test_display_and_debug() {
    let list: LinkedList<_> = (1..=3).collect();
    assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");

    let empty: LinkedList<u8> = LinkedList::new();
    assert_eq!(empty.to_string(), "()");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::counter();
    let mut list: LinkedList<_> = (0..8).map(|_| CountedDrop::new(&counter)).collect();

    drop(list.pop_front());
    drop(list.remove_at(3));
    assert_eq!(counter.get(), 2);

    let mut iter = list.into_iter();
    drop(iter.next_back());
    drop(iter);
    assert_eq!(counter.get(), 8, "Every element should be dropped exactly once.");
}

#[test]
fn test_cursor_remove_current() {
    let mut list: LinkedList<_> = (1..=6).collect();
    let mut cursor = list.cursor();

    while let Some(value) = cursor.next(&list).unwrap() {
        if *value % 2 == 1 {
            cursor.remove_current(&mut list).unwrap();
        }
    }

    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
}

#[test]
fn test_cursor_detects_modification() {
    let mut list: LinkedList<_> = (1..=3).collect();
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();

    let handle = list.front_handle().unwrap();
    list.insert_after(handle, 10);

    assert!(cursor.next(&list).is_err(), "An insert behind the cursor's back should be detected.");
    assert!(cursor.has_next(&list).is_err());
}

proptest! {
    #[test]
    fn prop_matches_vec_deque(ops in prop::collection::vec((0..6u8, any::<i16>(), any::<usize>()), 0..150)) {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();

        for (op, value, index) in ops {
            match op {
                0 => {
                    list.push_front(value);
                    model.push_front(value);
                },
                1 => {
                    list.push_back(value);
                    model.push_back(value);
                },
                2 => {
                    prop_assert_eq!(list.pop_front(), model.pop_front());
                },
                3 => {
                    prop_assert_eq!(list.pop_back(), model.pop_back());
                },
                4 => {
                    let index = index % (model.len() + 1);
                    list.insert_at(index, value);
                    model.insert(index, value);
                },
                _ => if !model.is_empty() {
                    let index = index % model.len();
                    prop_assert_eq!(Some(list.remove_at(index)), model.remove(index));
                },
            }

            list.verify_double_links();
            prop_assert!(list.iter().eq(model.iter()));
        }
    }
}
