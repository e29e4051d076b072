#![cfg(test)]

use std::num::NonZero;

use super::*;
use crate::util::hash::{BadHasherBuilder, ManualHash};

fn cap(n: usize) -> NonZero<usize> {
    NonZero::new(n).expect("Test capacities are non-zero.")
}

#[test]
fn test_eviction_order() {
    let mut map = LruMap::new(cap(3));

    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("c", 3), None);
    assert_eq!(map.len(), 3);

    // "a" is the LRU entry, so a fourth key pushes it out.
    assert_eq!(map.insert("d", 4), None);
    assert_eq!(map.len(), 3);
    assert_eq!(map.peek("a"), None, "The least-recently used entry should be evicted.");
    assert_eq!(map.peek("b"), Some(&2));
    map.verify_links();
}

#[test]
fn test_get_refreshes_recency() {
    let mut map = LruMap::new(cap(3));
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    // Touching "a" makes "b" the LRU entry.
    assert_eq!(map.get("a"), Some(&1));
    map.insert("d", 4);

    assert_eq!(map.peek("b"), None, "Accessing an entry should protect it from eviction.");
    assert_eq!(map.peek("a"), Some(&1));
    assert_eq!(map.peek_lru(), Some((&"c", &3)));
    map.verify_links();
}

#[test]
fn test_peek_does_not_refresh() {
    let mut map = LruMap::new(cap(2));
    map.insert("a", 1);
    map.insert("b", 2);

    assert_eq!(map.peek("a"), Some(&1));
    assert!(map.contains_key("a"));
    map.insert("c", 3);

    assert_eq!(map.peek("a"), None, "peek and contains_key must not count as access.");
}

#[test]
fn test_replace_existing_key() {
    let mut map = LruMap::new(cap(2));
    map.insert("a", 1);
    map.insert("b", 2);

    assert_eq!(map.insert("a", 10), Some(1), "Replacing should return the old value.");
    assert_eq!(map.len(), 2, "Replacing must not evict anything.");

    // The replacement counted as access, so "b" is now the LRU entry.
    map.insert("c", 3);
    assert_eq!(map.peek("b"), None);
    assert_eq!(map.peek("a"), Some(&10));
}

#[test]
fn test_push_returns_displaced() {
    let mut map = LruMap::new(cap(2));
    assert_eq!(map.push("a", 1), None);
    assert_eq!(map.push("b", 2), None);

    assert_eq!(map.push("a", 10), Some(("a", 1)), "push should hand back the replaced pair.");
    assert_eq!(map.push("c", 3), Some(("b", 2)), "push should hand back the evicted pair.");
    map.verify_links();
}

#[test]
fn test_pop_and_remove() {
    let mut map = LruMap::new(cap(3));
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    assert_eq!(map.pop_lru(), Some(("a", 1)));
    assert_eq!(map.remove("c"), Some(3));
    assert_eq!(map.remove("z"), None);
    assert_eq!(map.len(), 1);
    map.verify_links();

    assert_eq!(map.pop_lru(), Some(("b", 2)));
    assert_eq!(map.pop_lru(), None);
    assert!(map.is_empty());
}

#[test]
fn test_iteration_order() {
    let mut map = LruMap::new(cap(4));
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);
    map.get("a");

    assert_eq!(
        map.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        ["b", "c", "a"],
        "Iteration should run from least- to most-recently used."
    );
    assert_eq!(
        map.iter().rev().map(|(k, _)| *k).collect::<Vec<_>>(),
        ["a", "c", "b"]
    );
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [("b", 2), ("c", 3), ("a", 1)]);
}

#[test]
fn test_hash_collisions() {
    let mut map = LruMap::with_hasher(cap(4), BadHasherBuilder);
    map.insert(ManualHash::new(0, "zero"), 0);
    map.insert(ManualHash::new(0, "one"), 1);
    map.insert(ManualHash::new(0, "two"), 2);
    map.insert(ManualHash::new(0, "three"), 3);

    assert_eq!(map.get(&ManualHash::new(0, "one")), Some(&1));
    map.verify_links();

    // Evicting and removing chained entries must keep the remaining chain intact.
    map.insert(ManualHash::new(0, "four"), 4);
    assert_eq!(map.peek(&ManualHash::new(0, "zero")), None);
    assert_eq!(map.remove(&ManualHash::new(0, "two")), Some(2));
    map.verify_links();

    assert_eq!(map.peek(&ManualHash::new(0, "one")), Some(&1));
    assert_eq!(map.peek(&ManualHash::new(0, "three")), Some(&3));
    assert_eq!(map.peek(&ManualHash::new(0, "four")), Some(&4));
}

#[test]
fn test_clear() {
    let mut map = LruMap::new(cap(2));
    map.insert("a", 1);
    map.insert("b", 2);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.peek("a"), None);

    map.insert("c", 3);
    assert_eq!(map.peek_lru(), Some((&"c", &3)));
    map.verify_links();
}

#[test]
fn test_capacity_one() {
    let mut map = LruMap::new(cap(1));
    map.insert("a", 1);
    map.insert("b", 2);

    assert_eq!(map.len(), 1);
    assert_eq!(map.peek("a"), None);
    assert_eq!(map.peek("b"), Some(&2));
    map.verify_links();
}

#[test]
fn test_equality_and_clone() {
    let mut map = LruMap::new(cap(3));
    map.insert("a", 1);
    map.insert("b", 2);

    let mut other = LruMap::new(cap(3));
    other.insert("b", 2);
    other.insert("a", 1);

    assert_eq!(map, other, "Equality should ignore access order.");

    let cloned = map.clone();
    assert_eq!(cloned.iter().collect::<Vec<_>>(), map.iter().collect::<Vec<_>>());

    map.insert("c", 3);
    assert_ne!(map, other);
}
