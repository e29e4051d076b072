//! Buffered copy helpers between readers, writers and files.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::string::FromUtf8Error;

use derive_more::{Display, Error, From};

/// The buffer size used by the copy loop, matching the standard library's buffered defaults.
pub const BUF_SIZE: usize = 8 * 1024;

#[derive(Debug, Display, Error, From)]
pub enum CopyError {
    #[display("error during I/O: {_0}")]
    Io(io::Error),
    #[display("copied bytes are not valid UTF-8: {_0}")]
    InvalidUtf8(FromUtf8Error),
}

/// Copies everything `reader` yields into `writer`, returning the number of bytes copied.
/// Interrupted reads are retried; the writer is not flushed.
pub fn copy<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, CopyError> {
    let mut buf = [0_u8; BUF_SIZE];
    let mut copied = 0_u64;

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error.into()),
        };
        writer.write_all(&buf[..read])?;
        copied += read as u64;
    }
}

/// Copies the file at `src` to `dest`, creating or truncating `dest`. Returns the number of
/// bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<u64, CopyError> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dest)?;

    let copied = copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Reads everything `reader` yields into a UTF-8 string.
pub fn read_to_string<R: Read + ?Sized>(reader: &mut R) -> Result<String, CopyError> {
    Ok(String::from_utf8(read_to_bytes(reader)?)?)
}

/// Reads everything `reader` yields into a byte vector.
pub fn read_to_bytes<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>, CopyError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Reads the file at `path` into a UTF-8 string.
pub fn read_file_to_string<P: AsRef<Path>>(path: P) -> Result<String, CopyError> {
    read_to_string(&mut File::open(path)?)
}

/// Reads the file at `path` into a byte vector.
pub fn read_file_to_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, CopyError> {
    read_to_bytes(&mut File::open(path)?)
}

/// Writes `bytes` to the file at `path`, creating or truncating it.
pub fn write_file_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), CopyError> {
    let mut writer = File::create(path)?;
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
