//! Flush and sync helpers. Closing is [`Drop`]'s job in Rust; what these add is the
//! flush-and-swallow contract for scope ends where there's nothing useful left to do with a
//! failure, plus a typed variant for when there is.

use std::fs::File;
use std::io::{self, Write};

use derive_more::{Display, Error, From};
use log::warn;

#[derive(Debug, Display, Error, From)]
#[display("flush failed: {_0}")]
pub struct FlushError(io::Error);

/// Flushes `writer`, surfacing any failure as a typed error.
pub fn flush<W: Write + ?Sized>(writer: &mut W) -> Result<(), FlushError> {
    Ok(writer.flush()?)
}

/// Flushes `writer`; a failure is logged at warn level and swallowed.
pub fn flush_quietly<W: Write + ?Sized>(writer: &mut W) {
    if let Err(error) = writer.flush() {
        warn!("Swallowed an error while flushing a writer: {error}");
    }
}

/// Syncs `file`'s contents and metadata to disk; a failure is logged at warn level and
/// swallowed.
pub fn sync_quietly(file: &File) {
    if let Err(error) = file.sync_all() {
        warn!("Swallowed an error while syncing a file: {error}");
    }
}
