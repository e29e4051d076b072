//! String predicates and conversions. Everything here takes `&str` and leaves the standard
//! library's own surface (trimming, splitting, exact matching) alone.

/// Returns true if `s` is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Uppercases the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character of `s`, following the JavaBeans convention: when the first
/// two characters are both uppercase the name is treated as starting with an acronym and left
/// alone ("URL" stays "URL", "Name" becomes "name").
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(first), second) => {
            if first.is_uppercase()
                && second.is_some_and(char::is_uppercase)
            {
                return s.to_string();
            }
            first.to_lowercase().chain(s.chars().skip(1)).collect()
        },
        (None, _) => String::new(),
    }
}

/// Converts a snake_case or kebab-case name to UpperCamelCase. Each segment is capitalized and
/// the rest of the segment lowercased; empty segments (doubled separators) are skipped.
pub fn camelize(s: &str) -> String {
    s.split(['_', '-'])
        .filter(|seg| !seg.is_empty())
        .map(|seg| {
            let mut chars = seg.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts a camelCase or UpperCamelCase name to snake_case. A run of uppercase characters is
/// treated as an acronym: `parseURLString` becomes `parse_url_string`.
pub fn decamelize(s: &str) -> String {
    let chars = s.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let after_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_numeric();
            let before_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // A boundary sits before an uppercase char that follows lowercase, or that starts
            // the last word of an acronym run.
            if after_lower || (chars[i - 1].is_uppercase() && before_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Compares two strings for equality ignoring case, using Unicode simple folding (each char
/// lowercased). No allocation.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold(a).eq(fold(b))
}

/// Returns true if `s` starts with `prefix`, ignoring case.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut chars = fold(s);
    for expected in fold(prefix) {
        if chars.next() != Some(expected) {
            return false;
        }
    }
    true
}

/// Returns true if `s` ends with `suffix`, ignoring case.
pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    let len = fold(s).count();
    let suffix_len = fold(suffix).count();
    if suffix_len > len {
        return false;
    }
    fold(s).skip(len - suffix_len).eq(fold(suffix))
}

/// Returns true if `s` contains `needle`, ignoring case.
pub fn contains_ignore_case(s: &str, needle: &str) -> bool {
    s.char_indices()
        .map(|(i, _)| i)
        .chain([s.len()])
        .any(|i| starts_with_ignore_case(&s[i..], needle))
}

/// The case-folded characters of `s`. Simple folding only: one `to_lowercase` per char, no
/// locale awareness.
pub(crate) fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}
