use std::io;
use std::string::FromUtf8Error;

use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, From)]
pub enum PropertiesError {
    #[display("error during I/O: {_0}")]
    Io(io::Error),
    #[display("properties text is not valid UTF-8: {_0}")]
    InvalidUtf8(FromUtf8Error),
    /// A `\u` escape was malformed: fewer than four hex digits, or a code point that isn't a
    /// character. `line` is the first line of the logical line containing it.
    #[display("invalid \\u escape in the entry starting on line {line}")]
    #[from(ignore)]
    InvalidUnicodeEscape { line: usize },
}
