#![cfg(test)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;
use crate::collections::linked::LinkedList;
use crate::collections::traits::{Set, copy_into};
use crate::error::EmptyCollection;
use crate::order::{Natural, Reversed, by_key};

fn set_of(items: &[i32]) -> TreeSet<i32> {
    items.iter().copied().collect()
}

fn items(set: &TreeSet<i32>) -> Vec<i32> {
    set.iter().copied().collect()
}

#[test]
fn test_insert_and_remove() {
    let mut set = TreeSet::new();
    assert!(set.insert(5));
    assert!(set.insert(2));
    assert!(!set.insert(5), "Inserting a duplicate should report false.");
    assert_eq!(set.len(), 2);

    assert!(set.contains(&2));
    assert_eq!(set.get(&5), Some(&5));
    assert!(set.remove(&2));
    assert!(!set.remove(&2));
    assert_eq!(set.take(&5), Some(5));
    assert!(set.is_empty());
    set.inner.verify_red_black();
}

#[test]
fn test_ordering_and_neighbours() {
    let set = set_of(&[42, 7, 19, 7, 3]);

    assert_eq!(items(&set), [3, 7, 19, 42]);
    assert_eq!(set.first(), Some(&3));
    assert_eq!(set.last(), Some(&42));
    assert_eq!(set.floor(&18), Some(&7));
    assert_eq!(set.ceiling(&18), Some(&19));
    assert_eq!(set.lower(&7), Some(&3));
    assert_eq!(set.higher(&42), None);
    assert_eq!(set.iter().rev().next(), Some(&42));
}

#[test]
fn test_empty_set() {
    let mut set: TreeSet<i32> = TreeSet::new();

    assert_eq!(set.first(), None);
    assert_eq!(set.try_first(), Err(EmptyCollection));
    assert_eq!(set.try_last(), Err(EmptyCollection));
    assert_eq!(set.pop_last(), None);
    assert_eq!(set.to_string(), "{}");
}

#[test]
fn test_duplicate_by_comparator() {
    let mut set = TreeSet::with_comparator(by_key(|word: &&str| word.len()));
    assert!(set.insert("pear"));
    assert!(set.insert("fig"));
    let mod_count = set.mod_count();

    assert!(!set.insert("plum"), "Equal under the comparator counts as a duplicate.");
    assert_eq!(set.mod_count(), mod_count);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["fig", "pear"]);
}

#[test]
fn test_reversed_order() {
    let mut set = TreeSet::with_comparator(Reversed(Natural));
    set.extend([1, 4, 2, 3]);

    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
    assert_eq!(set.pop_first(), Some(4));
    assert_eq!(set.pop_last(), Some(1));
    set.inner.verify_red_black();
}

#[test]
fn test_set_algebra() {
    let a = set_of(&[1, 2, 3, 4]);
    let b = set_of(&[3, 4, 5]);

    assert_eq!(a.union(&b).copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(a.intersection(&b).copied().collect::<Vec<_>>(), [3, 4]);
    assert_eq!(a.difference(&b).copied().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(a.symmetric_difference(&b).copied().collect::<Vec<_>>(), [1, 2, 5]);

    assert!(set_of(&[2, 3]).is_subset(&a));
    assert!(a.is_superset(&set_of(&[4])));
    assert!(a.is_disjoint(&set_of(&[9])));
    assert!(!a.is_disjoint(&b));
}

#[test]
fn test_operators() {
    let a = set_of(&[1, 2, 3]);
    let b = set_of(&[2, 3, 4]);

    assert_eq!(items(&(&a | &b)), [1, 2, 3, 4]);
    assert_eq!(items(&(&a & &b)), [2, 3]);
    assert_eq!(items(&(&a ^ &b)), [1, 4]);
    assert_eq!(items(&(&a - &b)), [1]);
}

#[test]
fn test_source_and_sink() {
    let mut words: LinkedList<&str> = LinkedList::new();
    words.extend(["cherry", "apple", "banana", "apple"]);

    let mut set = TreeSet::new();
    assert_eq!(copy_into(&words, &mut set), 4);
    assert_eq!(set.to_string(), "{apple, banana, cherry}");
}

#[test]
fn test_equality_and_clone() {
    let a = set_of(&[1, 2]);
    let mut b = a.clone();

    assert_eq!(a, b);
    b.insert(3);
    assert_ne!(a, b);
}

#[test]
fn test_iterators() {
    let set = set_of(&[1, 2, 3, 4]);

    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 2);
    assert_eq!((&set).into_iter().count(), 4);
    assert_eq!(set.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
}

#[test]
fn test_cursor() {
    let mut set = set_of(&[1, 2, 3, 4, 5, 6]);
    let mut cursor = set.cursor();

    while let Some(item) = cursor.next(&set).unwrap() {
        if item % 3 == 0 {
            cursor.remove_current(&mut set).unwrap();
        }
    }
    assert_eq!(items(&set), [1, 2, 4, 5]);
    set.inner.verify_red_black();

    let mut cursor = set.cursor();
    cursor.next(&set).unwrap();
    set.insert(10);
    assert!(cursor.next(&set).is_err(), "Inserting should invalidate the cursor.");
}

proptest! {
    #[test]
    fn prop_matches_btree_set(ops in prop::collection::vec((any::<bool>(), 0..100i32), 0..300)) {
        let mut set = TreeSet::new();
        let mut model = BTreeSet::new();

        for (insert, item) in ops {
            if insert {
                prop_assert_eq!(set.insert(item), model.insert(item));
            } else {
                prop_assert_eq!(set.remove(&item), model.remove(&item));
            }
        }

        set.inner.verify_red_black();
        prop_assert!(set.iter().eq(model.iter()));
        prop_assert_eq!(set.first(), model.first());
        prop_assert_eq!(set.last(), model.last());
    }
}
