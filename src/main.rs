use std::fmt::{self, Debug, Formatter};

use core_collections::collections::contiguous::Vector;
use core_collections::collections::hash::{HashMap, HashSet};
use core_collections::collections::linked::LinkedList;
use core_collections::collections::tree::{TreeMap, TreeSet};
use core_collections::error::CollectionError;
use core_collections::order::{self, Then, by_key};

struct Person {
    name: &'static str,
    age: u32,
}

impl Debug for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

fn main() -> Result<(), CollectionError> {
    println!("=== Iteration ===");

    let fruits: Vector<&str> = ["Apple", "Banana", "Cherry"].into_iter().collect();
    for fruit in fruits.iter() {
        println!("Fruit: {fruit}");
    }

    let mut cursor = fruits.cursor();
    while let Some(fruit) = cursor.next(&fruits)? {
        println!("Cursor: {fruit}");
    }

    println!("\n=== Vector ===");

    let mut numbers = Vector::new();
    numbers.extend([1, 2, 3]);
    println!("Vector: {numbers}");
    println!("Size: {}", numbers.len());
    println!("Contains 2: {}", numbers.contains(&2));
    println!("Index of 3: {:?}", numbers.index_of(&3));
    if let Err(error) = numbers.try_get(5) {
        println!("Element 5: {error}");
    }

    println!("\n=== LinkedList ===");

    let names: LinkedList<&str> = ["Alice", "Bob", "Charlie"].into_iter().collect();
    println!("LinkedList: {names}");
    println!("First element: {:?}", names.front());
    println!("Last element: {:?}", names.back());

    println!("\n=== Comparators ===");

    let mut people: Vector<Person> = [("Alice", 30), ("Bob", 25), ("Charlie", 35)]
        .into_iter()
        .map(|(name, age)| Person { name, age })
        .collect();

    let by_age = by_key(|person: &Person| person.age);
    people.sort_with(&by_age);
    println!("Sorted by age: {people}");

    let by_name = |a: &Person, b: &Person| a.name.cmp(b.name);
    order::sort(&mut people, &Then(by_name, by_age));
    println!("Sorted by name: {people}");
    let oldest = order::max_by(people.iter(), &by_key(|person: &&Person| person.age));
    println!("Oldest: {oldest:?}");

    println!("\n=== HashSet ===");

    let mut unique_words: HashSet<&str> = HashSet::new();
    for word in ["apple", "banana", "apple", "orange"] {
        unique_words.insert(word);
    }
    println!("HashSet: {unique_words}");
    println!("Size: {}", unique_words.len());
    println!("Contains 'banana': {}", unique_words.contains("banana"));

    println!("\n=== TreeSet ===");

    let mut sorted_numbers = TreeSet::new();
    for number in [5, 2, 8, 1, 9] {
        sorted_numbers.insert(number);
    }
    println!("TreeSet: {sorted_numbers}");
    println!("First element: {}", sorted_numbers.try_first()?);
    println!("Last element: {}", sorted_numbers.try_last()?);

    println!("\n=== HashMap ===");

    let mut student_scores: HashMap<&str, u32> = HashMap::new();
    student_scores.insert("John", 85);
    student_scores.insert("Jane", 92);
    student_scores.insert("Jim", 78);
    println!("HashMap: {student_scores}");
    println!("John's score: {}", student_scores.try_get("John")?);
    println!("Contains key 'Jane': {}", student_scores.contains_key("Jane"));
    println!("Contains value 92: {}", student_scores.contains_value(&92));

    println!("\n=== TreeMap ===");

    let mut country_capitals = TreeMap::new();
    country_capitals.insert("USA", "Washington D.C.");
    country_capitals.insert("UK", "London");
    country_capitals.insert("France", "Paris");
    println!("TreeMap: {country_capitals}");
    println!("First key: {}", country_capitals.try_first_key()?);
    println!("Last key: {}", country_capitals.try_last_key()?);

    println!("\n=== Fail-fast Cursors ===");

    let mut cursor = country_capitals.cursor();
    cursor.next(&country_capitals)?;
    country_capitals.insert("Japan", "Tokyo");
    match cursor.next(&country_capitals) {
        Ok(_) => println!("The cursor missed the insertion."),
        Err(error) => println!("Detected: {error}"),
    }

    let mut cursor = unique_words.cursor();
    while let Some(word) = cursor.next(&unique_words)? {
        if word.starts_with('a') {
            cursor.remove_current(&mut unique_words)?;
        }
    }
    println!("Without 'a' words: {unique_words}");

    Ok(())
}
