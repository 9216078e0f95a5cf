#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::hash::HashSet;
use crate::collections::linked::LinkedList;

fn total<S: Source<u32> + ?Sized>(source: &S) -> u32 {
    source.iter().sum()
}

fn fill<D: Sink<u32> + ?Sized>(sink: &mut D) {
    for value in [5, 3, 5] {
        sink.put(value);
    }
}

#[test]
fn test_source_accepts_any_collection() {
    let vec: Vector<u32> = (1..=4).collect();
    let list: LinkedList<u32> = (1..=4).collect();
    let set: HashSet<u32> = (1..=4).collect();

    assert_eq!(total(&vec), 10);
    assert_eq!(total(&list), 10);
    assert_eq!(total(&set), 10);
    assert_eq!(Source::len(&list), 4);
    assert!(Source::is_empty(&Vector::<u32>::new()));
}

#[test]
fn test_sink_accepts_any_collection() {
    let mut vec: Vector<u32> = Vector::new();
    let mut list: LinkedList<u32> = LinkedList::new();
    let mut set: HashSet<u32> = HashSet::new();

    fill(&mut vec);
    fill(&mut list);
    fill(&mut set);

    assert_eq!(&*vec, &[5, 3, 5]);
    assert_eq!(list.to_string(), "(5) -> (3) -> (5)");
    assert_eq!(set.len(), 2, "A set sink should drop the duplicate.");
}

#[test]
fn test_copy_into() {
    let list: LinkedList<String> = ["a", "b"].into_iter().map(String::from).collect();
    let mut vec = Vector::new();
    vec.push(String::from("z"));

    assert_eq!(copy_into(&list, &mut vec), 2);
    assert_eq!(&*vec, &["z", "a", "b"]);
    assert_eq!(list.len(), 2, "Copying shouldn't consume the source.");
}
