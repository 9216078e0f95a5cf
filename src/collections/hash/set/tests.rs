#![cfg(test)]

use std::collections::HashSet as StdHashSet;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Set, copy_into};
use crate::util::hash::{ManualHash, PassThroughBuilder};

fn set_of(items: &[u32]) -> HashSet<u32> {
    items.iter().copied().collect()
}

fn sorted<'a>(iter: impl Iterator<Item = &'a u32>) -> Vec<u32> {
    let mut items: Vec<_> = iter.copied().collect();
    items.sort();
    items
}

#[test]
fn test_insert_and_remove() {
    let mut set: HashSet<String> = HashSet::new();
    assert!(set.insert(String::from("red")));
    assert!(set.insert(String::from("green")));
    assert!(!set.insert(String::from("red")), "Inserting a duplicate should report false.");
    assert_eq!(set.len(), 2);

    assert!(set.contains("green"));
    assert_eq!(set.get("red"), Some(&String::from("red")));
    assert!(set.remove("green"));
    assert!(!set.remove("green"));
    assert_eq!(set.take("red"), Some(String::from("red")));
    assert!(set.is_empty());
}

#[test]
fn test_duplicate_keeps_first() {
    let mut set = HashSet::with_hasher(PassThroughBuilder);
    set.insert(ManualHash::new(4, 'a'));
    let mod_count = set.mod_count();

    assert!(!set.insert(ManualHash::new(4, 'a')));
    assert_eq!(set.mod_count(), mod_count, "A rejected duplicate isn't a modification.");
    assert_eq!(set.len(), 1);
}

#[test]
fn test_collisions() {
    let mut set = HashSet::with_hasher(PassThroughBuilder);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(8, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(16, "three"));

    assert!(set.remove(&ManualHash::new(8, "one")));

    assert_eq!(
        set.into_iter().map(|item| item.value()).collect::<Vec<_>>(),
        ["zero", "three", "two"],
        "Colliding items should stay in their bucket's chain, in insertion order."
    );
}

#[test]
fn test_set_algebra() {
    let a = set_of(&[1, 2, 3, 4]);
    let b = set_of(&[3, 4, 5]);

    assert_eq!(sorted(a.union(&b)), [1, 2, 3, 4, 5]);
    assert_eq!(sorted(a.intersection(&b)), [3, 4]);
    assert_eq!(sorted(a.difference(&b)), [1, 2]);
    assert_eq!(sorted(a.symmetric_difference(&b)), [1, 2, 5]);

    assert!(set_of(&[3, 4]).is_subset(&a));
    assert!(a.is_superset(&set_of(&[1, 4])));
    assert!(!a.is_subset(&b));
    assert!(a.is_disjoint(&set_of(&[7, 8])));
    assert!(!a.is_disjoint(&b));

    let mut owned: Vec<_> = a.clone().into_difference(b.clone()).collect();
    owned.sort();
    assert_eq!(owned, [1, 2]);

    let mut owned: Vec<_> = a.into_intersection(b).collect();
    owned.sort();
    assert_eq!(owned, [3, 4]);
}

#[test]
fn test_operators() {
    let a = set_of(&[1, 2, 3]);
    let b = set_of(&[2, 3, 4]);

    assert_eq!(&a | &b, set_of(&[1, 2, 3, 4]));
    assert_eq!(&a & &b, set_of(&[2, 3]));
    assert_eq!(&a ^ &b, set_of(&[1, 4]));
    assert_eq!(&a - &b, set_of(&[1]));

    let mut c = a.clone();
    c |= b.clone();
    assert_eq!(c, set_of(&[1, 2, 3, 4]));

    let mut c = a.clone();
    c &= b.clone();
    assert_eq!(c, set_of(&[2, 3]));

    let mut c = a.clone();
    c ^= b.clone();
    assert_eq!(c, set_of(&[1, 4]));

    let mut c = a;
    c -= b;
    assert_eq!(c, set_of(&[1]));
}

#[test]
fn test_equality_ignores_order() {
    let a: HashSet<u32> = (0..50).collect();
    let b: HashSet<u32> = (0..50).rev().collect();

    assert_eq!(a, b);
    assert_ne!(a, set_of(&[1, 2]));
}

#[test]
fn test_source_and_sink() {
    let words: Vector<&str> = ["to", "be", "or", "not", "to", "be"].into_iter().collect();
    let mut unique: HashSet<&str> = HashSet::new();

    assert_eq!(copy_into(&words, &mut unique), 6);
    assert_eq!(unique.len(), 4, "Putting duplicates into a set should keep one of each.");
}

#[test]
fn test_display_and_debug() {
    let mut set = HashSet::with_hasher(PassThroughBuilder);
    set.insert(3_u64);
    set.insert(1);

    assert_eq!(set.to_string(), "#{1, 3}");
    assert_eq!(
        format!("{set:?}"),
        "HashSet { contents: #{1, 3}, len: 2, bucket_count: 8, hasher: PassThroughBuilder }"
    );
}

#[test]
fn test_cursor_remove_current() {
    let mut set: HashSet<u32> = (0..20).collect();
    let mut cursor = set.cursor();

    while let Some(item) = cursor.next(&set).unwrap() {
        if item % 2 == 1 {
            cursor.remove_current(&mut set).unwrap();
        }
    }

    assert_eq!(sorted(set.iter()), (0..20).step_by(2).collect::<Vec<_>>());

    let mut cursor = set.cursor();
    set.insert(100);
    assert!(cursor.next(&set).is_err(), "An insert after creating the cursor should be detected.");
}

proptest! {
    #[test]
    fn prop_matches_std(items in prop::collection::vec(0..100u32, 0..200), removed in prop::collection::vec(0..100u32, 0..50)) {
        let mut set: HashSet<u32> = items.iter().copied().collect();
        let mut model: StdHashSet<u32> = items.into_iter().collect();

        for item in removed {
            prop_assert_eq!(set.remove(&item), model.remove(&item));
        }

        prop_assert_eq!(set.len(), model.len());
        prop_assert!(set.iter().all(|item| model.contains(item)));
    }
}
