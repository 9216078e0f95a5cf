#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::*;
use crate::error::{EmptyCollection, KeyNotFound};
use crate::order::{Natural, Reversed};

fn shuffled(count: u32, seed: u64) -> Vec<u32> {
    let mut keys: Vec<_> = (0..count).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

#[test]
fn test_ordered_keys_and_neighbours() {
    let mut map = TreeMap::new();
    for key in [5, 2, 8, 1, 9] {
        map.insert(key, key.to_string());
        map.verify_red_black();
    }

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 5, 8, 9]);
    assert_eq!(map.first_key(), Some(&1));
    assert_eq!(map.last_key(), Some(&9));

    assert_eq!(map.floor_key(&6), Some(&5));
    assert_eq!(map.ceiling_key(&6), Some(&8));
    assert_eq!(map.floor_key(&5), Some(&5), "An equal key is its own floor.");
    assert_eq!(map.ceiling_key(&5), Some(&5));
    assert_eq!(map.lower_key(&5), Some(&2));
    assert_eq!(map.higher_key(&5), Some(&8));

    assert_eq!(map.floor_key(&0), None);
    assert_eq!(map.ceiling_key(&10), None);
    assert_eq!(map.lower_key(&1), None);
    assert_eq!(map.higher_key(&9), None);

    assert_eq!(map.floor_entry(&3), Some((&2, &String::from("2"))));
    assert_eq!(map.ceiling_entry(&3), Some((&5, &String::from("5"))));
}

#[test]
fn test_empty_map() {
    let mut map: TreeMap<u8, u8> = TreeMap::new();

    assert_eq!(map.first_key(), None);
    assert_eq!(map.try_first_key(), Err(EmptyCollection));
    assert_eq!(map.try_last_key(), Err(EmptyCollection));
    assert_eq!(map.try_get(&0), Err(KeyNotFound));
    assert_eq!(map.pop_first(), None);
    assert_eq!(map.remove(&0), None);
    assert_eq!(map.height(), 0);
    assert_eq!(map.iter().next(), None);
    map.verify_red_black();
}

#[test]
fn test_insert_replaces_value_keeps_key() {
    let by_lowercase = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
    let mut map = TreeMap::with_comparator(by_lowercase);

    assert_eq!(map.insert(String::from("Apple"), 1), None);
    let mod_count = map.mod_count();
    assert_eq!(map.insert(String::from("APPLE"), 2), Some(1));

    assert_eq!(map.len(), 1);
    assert_eq!(map.first_entry(), Some((&String::from("Apple"), &2)), "The original key stays.");
    assert_eq!(map.mod_count(), mod_count, "Replacing a value isn't a structural change.");
}

#[test]
fn test_borrowed_lookups() {
    let mut map: TreeMap<String, u32> = TreeMap::new();
    map.insert(String::from("b"), 2);
    map.insert(String::from("a"), 1);

    assert_eq!(map.get("a"), Some(&1));
    assert!(map.contains_key("b"));
    assert_eq!(map.try_get("c"), Err(KeyNotFound));

    *map.get_mut("b").unwrap() += 10;
    assert_eq!(map.remove("b"), Some(12));
    assert_eq!(map.get_entry("a"), Some((&String::from("a"), &1)));
}

#[test]
fn test_reversed_comparator() {
    let mut map = TreeMap::with_comparator(Reversed(Natural));
    for key in 1..=5 {
        map.insert(key, ());
    }
    map.verify_red_black();

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    assert_eq!(map.first_key(), Some(&5));
    assert_eq!(map.floor_key(&0), Some(&1), "Floor follows the comparator, not Ord.");
}

#[test]
fn test_height_stays_logarithmic() {
    let keys = shuffled(10_000, 7);
    let mut map = TreeMap::new();
    for &key in &keys {
        map.insert(key, key);
    }

    map.verify_red_black();
    assert_eq!(map.len(), 10_000);
    let bound = 2.0 * ((map.len() + 1) as f64).log2();
    assert!(map.height() as f64 <= bound, "A height of {} exceeds {bound}.", map.height());
    assert!(map.keys().copied().eq(0..10_000));

    for &key in keys.iter().step_by(2) {
        assert_eq!(map.remove(&key), Some(key));
    }

    map.verify_red_black();
    assert_eq!(map.len(), 5_000);
    let bound = 2.0 * ((map.len() + 1) as f64).log2();
    assert!(map.height() as f64 <= bound);
}

#[test]
fn test_removal_keeps_balance() {
    let mut map = TreeMap::new();
    for key in shuffled(200, 1) {
        map.insert(key, ());
    }

    for key in shuffled(200, 2) {
        assert_eq!(map.remove_entry(&key), Some((key, ())));
        map.verify_red_black();
        assert!(!map.contains_key(&key));
    }

    assert!(map.is_empty());
}

#[test]
fn test_slots_are_reused() {
    let mut map: TreeMap<_, _> = (0..10).map(|key| (key, key)).collect();
    let slots = map.nodes.len();

    map.remove(&3);
    map.remove(&7);
    map.insert(30, 30);
    map.insert(70, 70);

    assert_eq!(map.nodes.len(), slots, "Freed slots should be filled before the arena grows.");
    map.verify_red_black();
}

#[test]
fn test_pop_ends() {
    let mut map: TreeMap<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();

    assert_eq!(map.pop_first(), Some((1, 'a')));
    assert_eq!(map.pop_last(), Some((3, 'c')));
    map.verify_red_black();
    assert_eq!(map.first_key(), map.last_key());
}

#[test]
fn test_iterators() {
    let map: TreeMap<_, _> = (1..=6).map(|key| (key, key * key)).collect();

    let mut iter = map.iter();
    assert_eq!(iter.next(), Some((&1, &1)));
    assert_eq!(iter.next_back(), Some((&6, &36)));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.map(|(key, _)| *key).collect::<Vec<_>>(), [2, 3, 4, 5]);

    assert_eq!(map.values().rev().copied().collect::<Vec<_>>(), [36, 25, 16, 9, 4, 1]);
    assert_eq!((&map).into_iter().count(), 6);
    assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    assert_eq!(map.clone().into_values().next_back(), Some(36));
    assert_eq!(map.into_iter().rev().next(), Some((6, 36)));
}

#[test]
fn test_clear() {
    let mut map: TreeMap<_, _> = (0..20).map(|key| (key, ())).collect();
    let mod_count = map.mod_count();

    map.clear();
    assert!(map.is_empty());
    assert_ne!(map.mod_count(), mod_count);
    map.verify_red_black();

    map.insert(4, ());
    assert_eq!(map.first_key(), Some(&4));
}

#[test]
fn test_equality_and_clone() {
    let a: TreeMap<_, _> = [(1, "x"), (2, "y")].into_iter().collect();
    let mut b = a.clone();

    assert_eq!(a, b);
    b.insert(3, "z");
    assert_ne!(a, b);
}

#[test]
fn test_display_and_debug() {
    let map: TreeMap<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();

    assert_eq!(map.to_string(), "{1: 'a', 2: 'b', 3: 'c'}");
    assert_eq!(
        format!("{map:?}"),
        "TreeMap { nodes: \n\
        ┌    ┌    -\n\
        ┌    R(1: 'a')\n\
        ┌    └    -\n\
        B(2: 'b')\n\
        └    ┌    -\n\
        └    R(3: 'c')\n\
        └    └    -\n\
        , len: 3 }"
    );
}

#[test]
fn test_cursor_remove_current() {
    let mut map: TreeMap<_, _> = (0..50).map(|key| (key, key)).collect();
    let mut cursor = map.cursor();
    let mut seen = Vec::new();

    while let Some((key, _)) = cursor.next(&map).unwrap() {
        seen.push(*key);
        if key % 2 == 1 {
            cursor.remove_current(&mut map).unwrap();
        }
    }

    map.verify_red_black();
    assert_eq!(seen, (0..50).collect::<Vec<_>>(), "Removal shouldn't skip or repeat entries.");
    assert!(map.keys().copied().eq((0..50).step_by(2)));
}

#[test]
fn test_cursor_detects_modification() {
    let mut map: TreeMap<_, _> = (0..3).map(|key| (key, ())).collect();
    let mut cursor = map.cursor();
    cursor.next(&map).unwrap();

    map.insert(10, ());
    assert!(cursor.next(&map).is_err());
    assert!(cursor.has_next(&map).is_err());
}

proptest! {
    #[test]
    fn prop_matches_btree_map(ops in prop::collection::vec((any::<bool>(), 0..200u16, any::<u8>()), 0..300)) {
        let mut map = TreeMap::new();
        let mut model = BTreeMap::new();

        for (insert, key, value) in ops {
            if insert {
                prop_assert_eq!(map.insert(key, value), model.insert(key, value));
            } else {
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
        }

        map.verify_red_black();
        prop_assert!(map.iter().eq(model.iter()));
        prop_assert_eq!(map.first_key(), model.keys().next());
        prop_assert_eq!(map.last_key(), model.keys().next_back());
    }
}
