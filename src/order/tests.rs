#![cfg(test)]

use std::cmp::Ordering;

use proptest::prelude::*;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: &'static str,
    age: u32,
}

const fn person(name: &'static str, age: u32) -> Person {
    Person { name, age }
}

#[test]
fn test_natural_and_reversed() {
    assert_eq!(Natural.compare(&1, &2), Ordering::Less);
    assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
    assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
    assert_eq!(Reversed(Reversed(Natural)).compare(&1, &2), Ordering::Less);
}

#[test]
fn test_closure_and_then() {
    let by_age = |a: &Person, b: &Person| a.age.cmp(&b.age);
    let by_name = |a: &Person, b: &Person| a.name.cmp(b.name);
    let both = Then(by_age, by_name);

    assert_eq!(both.compare(&person("Bo", 30), &person("Al", 30)), Ordering::Greater);
    assert_eq!(both.compare(&person("Bo", 29), &person("Al", 30)), Ordering::Less);
    assert_eq!(both.compare(&person("Al", 30), &person("Al", 30)), Ordering::Equal);
}

#[test]
fn test_sort_is_stable() {
    let mut people = [
        person("Cy", 40),
        person("Al", 30),
        person("Di", 40),
        person("Bo", 30),
        person("Ed", 20),
    ];

    sort(&mut people, &by_key(|p: &Person| p.age));
    let names: Vec<_> = people.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        ["Ed", "Al", "Bo", "Cy", "Di"],
        "Equal ages should keep their original order."
    );
}

#[test]
fn test_sort_large_input() {
    let mut nums: Vec<u32> = (0..500).map(|i| (i * 7919) % 500).collect();
    sort(&mut nums, &Natural);

    assert!(is_sorted(&nums, &Natural));
    assert_eq!(nums, (0..500).collect::<Vec<_>>());
}

#[test]
fn test_sort_interleaved_runs_is_stable() {
    // Pairs of (key, original index), with both halves already sorted and fully interleaved.
    let half = 100_000;
    let mut pairs: Vec<(u32, u32)> = (0..half)
        .map(|i| (2 * i, i))
        .chain((0..half).map(|i| (2 * i + 1, half + i)))
        .collect();
    pairs.extend((0..4).map(|i| (0, 2 * half + i)));

    sort(&mut pairs, &by_key(|pair: &(u32, u32)| pair.0));

    assert!(is_sorted(&pairs, &by_key(|pair: &(u32, u32)| pair.0)));
    assert_eq!(&pairs[..5], &[(0, 0), (0, 200_000), (0, 200_001), (0, 200_002), (0, 200_003)]);
    assert!(
        pairs.windows(2).all(|pair| pair[0].0 != pair[1].0 || pair[0].1 < pair[1].1),
        "Equal keys should keep their original order."
    );
}

#[test]
fn test_max_and_min() {
    let people = [person("Al", 30), person("Bo", 40), person("Cy", 40), person("Di", 20)];
    let by_age = by_key(|p: &&Person| p.age);

    assert_eq!(max_by(&people, &by_age).map(|p| p.name), Some("Cy"), "Ties go to the last.");
    assert_eq!(min_by(&people, &by_age).map(|p| p.name), Some("Di"));
    assert_eq!(max_by(Vec::<u8>::new(), &Natural), None);
    assert_eq!(min_by([3, 1, 1], &Reversed(Natural)), Some(3));
}

#[test]
fn test_is_sorted() {
    assert!(is_sorted::<u8, _>(&[], &Natural));
    assert!(is_sorted(&[1, 1, 2], &Natural));
    assert!(!is_sorted(&[2, 1], &Natural));
    assert!(is_sorted(&[2, 1], &Reversed(Natural)));
}

proptest! {
    #[test]
    fn prop_sort_matches_std(values in prop::collection::vec((0..20u8, any::<u16>()), 0..300)) {
        let mut values = values;
        let mut expected = values.clone();
        expected.sort_by_key(|pair| pair.0);

        sort(&mut values, &by_key(|pair: &(u8, u16)| pair.0));
        prop_assert_eq!(values, expected);
    }
}
