#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::error::ConcurrentModification;

#[test]
fn test_mod_count_check() {
    let mut count = ModCount::new();
    let snapshot = count;
    assert_eq!(snapshot.check(count), Ok(()));

    count.bump();
    assert_eq!(count.get(), 1);
    assert_eq!(
        snapshot.check(count),
        Err(ConcurrentModification { expected: 0, found: 1 }),
        "A bumped count should no longer match the snapshot."
    );
}

#[test]
fn test_mod_count_wraps() {
    let mut count = ModCount(u64::MAX);
    count.bump();
    assert_eq!(count.get(), 0);
}

#[test]
fn test_empty_cursor() {
    let vec: Vector<u8> = Vector::new();
    let mut cursor = vec.cursor();

    assert_eq!(cursor.has_next(&vec), Ok(false));
    assert_eq!(cursor.next(&vec), Ok(None));
    assert_eq!(cursor.next(&vec), Ok(None), "An exhausted cursor should stay exhausted.");
}

#[test]
fn test_has_next_follows_next() {
    let vec: Vector<_> = (0..2).collect();
    let mut cursor = Cursor::new(&vec);

    assert_eq!(cursor.has_next(&vec), Ok(true));
    cursor.next(&vec).unwrap();
    assert_eq!(cursor.has_next(&vec), Ok(true));
    cursor.next(&vec).unwrap();
    assert_eq!(cursor.has_next(&vec), Ok(false));
}

#[test]
fn test_clone_is_independent() {
    let vec: Vector<_> = (0..3).collect();
    let mut cursor = vec.cursor();
    cursor.next(&vec).unwrap();

    let mut other = cursor.clone();
    assert_eq!(other.next(&vec), Ok(Some(&1)));
    assert_eq!(other.next(&vec), Ok(Some(&2)));
    assert_eq!(cursor.next(&vec), Ok(Some(&1)), "Advancing a clone shouldn't move the original.");
}

#[test]
fn test_error_reports_counts() {
    let mut vec: Vector<_> = (0..3).collect();
    let cursor = vec.cursor();
    let expected = cursor.expected_mod_count();

    vec.pop();
    vec.pop();

    assert_eq!(
        cursor.has_next(&vec),
        Err(ConcurrentModification {
            expected: expected.get(),
            found: vec.mod_count().get(),
        })
    );
    assert_eq!(vec.mod_count().get(), expected.get() + 2);
}
