//! Collections: Vec, HashMap, BTreeMap, HashSet, VecDeque
//!
//! Run with: cargo run --bin p02_collections

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

fn vectors() {
    println!("=== Vectors ===\n");

    let empty: Vec<i32> = Vec::new();
    let literal = vec![1, 2, 3, 4, 5];
    let words = vec!["apple", "banana", "cherry"];
    let repeated = vec![0u8; 4];
    let from_range: Vec<i32> = (1..=5).collect();
    let nested = vec![vec![1, 2], vec![3, 4], vec![5, 6]];

    println!("empty:      {:?}", empty);
    println!("literal:    {:?}", literal);
    println!("words:      {:?}", words);
    println!("repeated:   {:?}", repeated);
    println!("from range: {:?}", from_range);
    println!("nested:     {:?}", nested);

    let mut growable = Vec::with_capacity(8);
    growable.push("first");
    growable.push("second");
    println!("pushed:     {:?} (len {}, cap {})", growable, growable.len(), growable.capacity());
}

fn arrays_and_slices() {
    println!("\n=== Arrays and Slices ===\n");

    let fixed: [i32; 5] = [10, 20, 30, 40, 50];
    let slice = &fixed[1..4];

    println!("array: {:?}", fixed);
    println!("slice [1..4]: {:?}", slice);
    println!("first/last: {:?} / {:?}", fixed.first(), fixed.last());
}

fn hash_maps() {
    println!("\n=== HashMaps ===\n");

    let mut langs = HashMap::new();
    langs.insert("name", "Rust");
    langs.insert("edition", "2021");

    let from_pairs = HashMap::from([("key", "value"), ("another", "pair")]);

    println!("inserted:   {:?}", langs);
    println!("from pairs: {:?}", from_pairs);
    println!("get(name):  {:?}", langs.get("name"));
    println!("get(nope):  {:?}", langs.get("nope"));

    // The entry API mutates in place without a double lookup.
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for word in ["a", "b", "a", "c", "a", "b"] {
        *counts.entry(word).or_insert(0) += 1;
    }
    println!("word counts: {:?}", counts);

    // Nested maps
    let mut users: HashMap<&str, HashMap<&str, String>> = HashMap::new();
    users
        .entry("alice")
        .or_default()
        .insert("age", "30".to_string());
    println!("nested: {:?}", users);
}

fn btree_maps() {
    println!("\n=== BTreeMap (ordered) ===\n");

    let mut scores = BTreeMap::new();
    scores.insert("charlie", 72);
    scores.insert("alice", 95);
    scores.insert("bob", 88);

    // Iteration order is key order, unlike HashMap.
    for (name, score) in &scores {
        println!("  {}: {}", name, score);
    }
    println!("first: {:?}", scores.first_key_value());
}

fn hash_sets() {
    println!("\n=== HashSets ===\n");

    let unique: HashSet<i32> = [1, 2, 3, 3, 4].into_iter().collect();
    println!("deduplicated: {} elements from 5 inputs", unique.len());

    let a: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let b: HashSet<i32> = [3, 4, 5, 6].into_iter().collect();

    let mut union: Vec<_> = a.union(&b).copied().collect();
    let mut inter: Vec<_> = a.intersection(&b).copied().collect();
    let mut diff: Vec<_> = a.difference(&b).copied().collect();
    union.sort();
    inter.sort();
    diff.sort();

    println!("union:        {:?}", union);
    println!("intersection: {:?}", inter);
    println!("difference:   {:?}", diff);
}

fn deques() {
    println!("\n=== VecDeque as a Queue ===\n");

    let mut queue = VecDeque::new();
    queue.push_back("first");
    queue.push_back("second");
    queue.push_front("urgent");

    println!("queue: {:?}", queue);
    while let Some(item) = queue.pop_front() {
        println!("  serving {}", item);
    }
}

fn main() {
    println!("=== Collections Demo ===\n");

    vectors();
    arrays_and_slices();
    hash_maps();
    btree_maps();
    hash_sets();
    deques();

    println!("\n=== Key Points ===");
    println!("1. Vec is the workhorse; arrays have a compile-time length");
    println!("2. The entry API updates a map value in a single lookup");
    println!("3. BTreeMap iterates in key order, HashMap does not");
    println!("4. HashSet gives dedup plus set algebra");
}
