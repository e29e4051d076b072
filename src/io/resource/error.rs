use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, From)]
pub enum TraverseError {
    #[display("error during I/O: {_0}")]
    Io(io::Error),
    #[display("{path:?} is not a directory")]
    #[from(ignore)]
    NotADirectory { path: PathBuf },
    #[cfg(feature = "archive")]
    #[display("error reading archive: {_0}")]
    Zip(zip::result::ZipError),
}
