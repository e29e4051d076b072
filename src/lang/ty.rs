//! Helpers for working with the strings produced by [`std::any::type_name`]. Rust has no
//! runtime reflection; what it does have is fully qualified type names, and those are usually
//! too long for log lines and error messages.

use std::any::type_name;

/// Returns the name of `T` with every module path stripped, including inside generic
/// parameters: `Vec<alloc::string::String>` renders as `Vec<String>`.
pub fn short_name<T: ?Sized>() -> String {
    shorten(type_name::<T>())
}

/// Strips module paths from a fully qualified type name. The scan is bracket-aware, so paths
/// inside generics, tuples, slices and references are shortened as well.
pub fn shorten(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment = String::new();
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // A path separator discards everything gathered for the current segment.
            ':' => {
                if chars.peek() == Some(&':') {
                    chars.next();
                }
                segment.clear();
            },
            // Delimiters end the current segment; everything gathered since the last path
            // separator is the part worth keeping.
            '<' | '>' | ',' | ' ' | '&' | '(' | ')' | '[' | ']' | ';' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            },
            _ => segment.push(c),
        }
    }

    out.push_str(&segment);
    out
}

/// Returns the module path of the outermost type in `name`, or None for a bare name.
/// Generic parameters are ignored: `std::vec::Vec<u8>` gives `std::vec`.
pub fn module_path_of(name: &str) -> Option<&str> {
    let head_end = name.find('<').unwrap_or(name.len());
    let pos = name[..head_end].rfind("::")?;
    Some(&name[..pos])
}
