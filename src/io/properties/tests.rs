#![cfg(test)]

use super::*;

fn parse(text: &str) -> Properties {
    text.parse().expect("Test input should parse.")
}

#[test]
fn test_basic_pairs() {
    let props = parse("a=1\nb = 2\nc : 3\nd 4\ne\n");

    assert_eq!(props.get("a"), Some("1"));
    assert_eq!(props.get("b"), Some("2"), "Whitespace around the separator is insignificant.");
    assert_eq!(props.get("c"), Some("3"), "Colon works as a separator.");
    assert_eq!(props.get("d"), Some("4"), "Whitespace alone works as a separator.");
    assert_eq!(props.get("e"), Some(""), "A key with no separator maps to the empty value.");
    assert_eq!(props.get("f"), None);
    assert_eq!(props.get_or("f", "fallback"), "fallback");
}

#[test]
fn test_comments_and_blanks() {
    let props = parse("# comment = not a pair\n   ! also a comment\n\n   \na=1\n");

    assert_eq!(props.len(), 1);
    assert_eq!(props.get("a"), Some("1"));
}

#[test]
fn test_file_order_is_kept() {
    let props = parse("zebra=1\napple=2\nmango=3\n");

    assert_eq!(
        props.keys().collect::<Vec<_>>(),
        ["zebra", "apple", "mango"],
        "Iteration should follow file order, not key order."
    );
}

#[test]
fn test_duplicate_keys_keep_last_value_and_first_position() {
    let props = parse("a=1\nb=2\na=3\n");

    assert_eq!(props.len(), 2);
    assert_eq!(props.get("a"), Some("3"), "A later duplicate replaces the value.");
    assert_eq!(
        props.keys().collect::<Vec<_>>(),
        ["a", "b"],
        "A later duplicate doesn't move the key."
    );
}

#[test]
fn test_line_continuation() {
    let props = parse("fruits = apple, \\\n    banana, \\\n    pear\n");

    assert_eq!(props.get("fruits"), Some("apple, banana, pear"));
}

#[test]
fn test_even_backslashes_do_not_continue() {
    let props = parse("path = C:\\\\dir\\\\\nnext = 1\n");

    assert_eq!(props.get("path"), Some("C:\\dir\\"));
    assert_eq!(props.get("next"), Some("1"), "An escaped backslash must not eat the next line.");
}

#[test]
fn test_escapes() {
    let props = parse("tabbed = a\\tb\\nc\nun\\ escaped\\=key = v\nunicode = \\u0041\\u00e9\n");

    assert_eq!(props.get("tabbed"), Some("a\tb\nc"));
    assert_eq!(props.get("un escaped=key"), Some("v"), "Escapes protect separators in keys.");
    assert_eq!(props.get("unicode"), Some("Aé"));
}

#[test]
fn test_unknown_escape_yields_the_character() {
    let props = parse("key = \\q\\w\n");
    assert_eq!(props.get("key"), Some("qw"));
}

#[test]
fn test_invalid_unicode_escape() {
    let result = "a=1\nbad = \\u12\n".parse::<Properties>();

    match result {
        Err(PropertiesError::InvalidUnicodeEscape { line }) => {
            assert_eq!(line, 2, "The error should name the entry's starting line.");
        },
        other => panic!("Expected an invalid escape error, got {other:?}"),
    }
}

#[test]
fn test_store_round_trip() {
    let mut props = Properties::new();
    props.insert("plain", "value");
    props.insert("spaced key", " leading and trailing ");
    props.insert("seps=and:comments#", "a=b:c");
    props.insert("control", "line1\nline2\ttabbed");
    props.insert("trailing\\", "back\\slash");

    let mut buf = Vec::new();
    props.store(&mut buf).expect("Writing to a Vec can't fail.");

    let reloaded = Properties::load(&buf[..]).expect("Stored output should parse.");
    assert_eq!(reloaded, props, "store followed by load should reproduce every entry.");
    assert_eq!(
        reloaded.keys().collect::<Vec<_>>(),
        props.keys().collect::<Vec<_>>(),
        "store followed by load should reproduce the order."
    );
}

#[test]
fn test_insert_and_remove() {
    let mut props = parse("a=1\n");

    assert_eq!(props.insert("b", "2"), None);
    assert_eq!(props.insert("a", "10"), Some("1".to_string()));
    assert_eq!(props.remove("a"), Some("10".to_string()));
    assert_eq!(props.remove("a"), None);
    assert!(props.contains_key("b"));
    assert_eq!(props.len(), 1);
}

#[test]
fn test_load_from_reader() {
    let text = b"greeting = hello\n";
    let props = Properties::load(&text[..]).expect("Reading from a slice can't fail.");

    assert_eq!(props.get("greeting"), Some("hello"));
}
