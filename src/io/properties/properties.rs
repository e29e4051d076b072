use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use super::PropertiesError;
use crate::collections::ArrayMap;

/// An ordered set of string key-value pairs in the `.properties` format.
///
/// Entries are held in an [`ArrayMap`], so iteration and [`store`](Properties::store) follow
/// the order of the source file (or of insertion), the way the file was written.
///
/// The format follows the established `.properties` rules:
/// - Lines whose first non-blank character is `#` or `!` are comments; blank lines are
///   skipped.
/// - A line ending in an unescaped `\` continues on the next line, with that line's leading
///   whitespace stripped.
/// - The key ends at the first unescaped `=`, `:` or whitespace; whitespace around the
///   separator is insignificant. A line with no separator maps the whole line to `""`.
/// - `\t`, `\n`, `\r`, `\f`, `\\` and `\uXXXX` escapes are honored in keys and values; a
///   backslash before any other character yields that character.
///
/// One deliberate departure: input is read as UTF-8 rather than ISO-8859-1. `\uXXXX` escapes
/// still work, so files written for latin-1 loaders parse unchanged if they are ASCII.
pub struct Properties {
    pub(crate) entries: ArrayMap<String, String>,
}

impl Properties {
    /// Creates an empty Properties.
    pub fn new() -> Properties {
        Properties {
            entries: ArrayMap::new(),
        }
    }

    /// Reads and parses everything `reader` yields.
    pub fn load<R: Read>(mut reader: R) -> Result<Properties, PropertiesError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        String::from_utf8(bytes)?.parse()
    }

    /// Opens and parses the file at `path`.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Properties, PropertiesError> {
        Properties::load(File::open(path)?)
    }

    /// Writes every entry to `writer` as `key = value` lines, in map order, escaping
    /// whatever the parser would otherwise misread. The writer is flushed.
    pub fn store<W: Write>(&self, mut writer: W) -> Result<(), PropertiesError> {
        for (key, value) in self.entries.iter() {
            writeln!(writer, "{} = {}", escape(key, true), escape(value, false))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` if absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts the provided pair, returning the previous value for the key if any. New keys
    /// append at the end of the order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns an iterator over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromStr for Properties {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = ArrayMap::new();
        let mut lines = s.lines().enumerate();

        while let Some((index, raw)) = lines.next() {
            let line = raw.trim_start();
            if line.is_empty() || line.starts_with(['#', '!']) {
                continue;
            }

            // Gather the logical line: an odd number of trailing backslashes continues onto
            // the next physical line, whose leading whitespace is insignificant.
            let mut logical = String::from(line);
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical, index + 1)?;
            entries.insert(key, value);
        }

        Ok(Properties { entries })
    }
}

/// True if `line` ends with an odd number of backslashes, i.e. the final one escapes the line
/// break rather than a preceding backslash.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Splits one logical line into its unescaped key and value. `line` is the 1-based number of
/// the first physical line, for error reporting.
fn split_entry(logical: &str, line: usize) -> Result<(String, String), PropertiesError> {
    let mut key_end = logical.len();
    let mut chars = logical.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            // An escaped character never terminates the key.
            '\\' => {
                chars.next();
            },
            '=' | ':' => {
                key_end = i;
                break;
            },
            c if c.is_whitespace() => {
                key_end = i;
                break;
            },
            _ => {},
        }
    }

    let key = unescape(&logical[..key_end], line)?;

    // Whitespace around the separator is insignificant, and a single `=` or `:` may follow
    // whitespace that already ended the key.
    let mut rest = logical[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start();
    }
    let value = unescape(rest, line)?;

    Ok((key, value))
}

fn unescape(s: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let mut code = 0_u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|d| d.to_digit(16))
                        .ok_or(PropertiesError::InvalidUnicodeEscape { line })?;
                    code = code * 16 + digit;
                }
                // Surrogate code points aren't characters.
                let c = char::from_u32(code)
                    .ok_or(PropertiesError::InvalidUnicodeEscape { line })?;
                out.push(c);
            },
            // Any other escaped character, including the backslash itself, stands for itself.
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    Ok(out)
}

/// Escapes `s` so the parser reads it back verbatim. Keys additionally escape separator and
/// comment characters and all whitespace; values only need their leading whitespace protected.
fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len());

    for (i, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' if is_key => {
                out.push('\\');
                out.push(c);
            },
            ' ' if is_key || i == 0 => {
                out.push('\\');
                out.push(c);
            },
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }

    out
}

impl Default for Properties {
    fn default() -> Self {
        Properties::new()
    }
}

impl Clone for Properties {
    fn clone(&self) -> Self {
        Properties {
            entries: self.entries.clone(),
        }
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Properties {}

impl IntoIterator for Properties {
    type Item = (String, String);

    type IntoIter = crate::collections::array_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Debug for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("entries", &self.entries)
            .finish()
    }
}

impl Display for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
