#![cfg(test)]

use super::*;

#[test]
fn test_case_insensitive_lookup() {
    let mut map = CaseInsensitiveMap::from([("Content-Type", "text/html"), ("Accept", "*/*")]);

    assert_eq!(map.get("content-type"), Some(&"text/html"));
    assert_eq!(map.get("CONTENT-TYPE"), Some(&"text/html"));
    assert_eq!(map.get("accept"), Some(&"*/*"));
    assert_eq!(map.get("cookie"), None);
    assert!(map.contains_key("ACCEPT"));

    *map.get_mut("ACCEPT").expect("Key is present.") = "text/plain";
    assert_eq!(map.get("Accept"), Some(&"text/plain"));
}

#[test]
fn test_first_casing_is_kept() {
    let mut map = CaseInsensitiveMap::new();

    assert_eq!(map.insert("Content-Type", 1), None);
    assert_eq!(
        map.insert("CONTENT-TYPE", 2),
        Some(1),
        "A case-equivalent insert should replace the value."
    );
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get_entry("content-type"),
        Some(("Content-Type", &2)),
        "The casing of the first insertion should be the one stored."
    );
}

#[test]
fn test_unicode_folding() {
    let mut map = CaseInsensitiveMap::new();
    map.insert("Größe", 1);

    assert_eq!(map.get("GRÖSSE"), None, "Simple folding doesn't equate ß with ss.");
    assert_eq!(map.get("größe"), Some(&1));
    assert_eq!(map.get("GRÖßE"), Some(&1));
}

#[test]
fn test_positional_access() {
    let mut map = CaseInsensitiveMap::from([("B", 2), ("a", 1), ("C", 3)]);

    assert_eq!(map.get_at(0), ("B", &2));
    assert_eq!(map.index_of("A"), Some(1));
    assert_eq!(map.try_get_at(3), None);

    assert_eq!(map.set_at(2, 30), 3);
    assert_eq!(map.remove_at(0), ("B".to_string(), 2));
    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        ["a", "C"],
        "Positional removal should shift later entries down."
    );
}

#[test]
fn test_remove() {
    let mut map = CaseInsensitiveMap::from([("Alpha", 1), ("Beta", 2)]);

    assert_eq!(map.remove("ALPHA"), Some(1));
    assert_eq!(map.remove("alpha"), None);
    assert_eq!(map.remove_entry("beta"), Some(("Beta".to_string(), 2)));
    assert!(map.is_empty());
}

#[test]
fn test_iteration_order() {
    let map = CaseInsensitiveMap::from([("One", 1), ("Two", 2), ("Three", 3)]);

    assert_eq!(map.keys().collect::<Vec<_>>(), ["One", "Two", "Three"]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(
        map.into_iter().collect::<Vec<_>>(),
        [
            ("One".to_string(), 1),
            ("Two".to_string(), 2),
            ("Three".to_string(), 3),
        ]
    );
}

#[test]
fn test_equality() {
    let a = CaseInsensitiveMap::from([("KEY", 1)]);
    let b = CaseInsensitiveMap::from([("key", 1)]);
    let c = CaseInsensitiveMap::from([("key", 2)]);

    assert_eq!(a, b, "Equality should fold key case like lookup does.");
    assert_ne!(a, c);
}
