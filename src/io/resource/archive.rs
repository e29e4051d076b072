use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, trace};
use zip::ZipArchive;

use super::TraverseError;

/// Opens the zip archive at `path` and invokes `handler` with each regular-file entry's name
/// and a reader over its decompressed contents, in archive order.
///
/// Directory entries are skipped. An error returned by the handler aborts the traversal and
/// surfaces as [`TraverseError::Io`].
pub fn visit_zip<P, F>(path: P, mut handler: F) -> Result<(), TraverseError>
where
    P: AsRef<Path>,
    F: FnMut(&str, &mut dyn Read) -> io::Result<()>,
{
    let path = path.as_ref();
    debug!("Walking entries in archive {}", path.display());

    let mut archive = ZipArchive::new(File::open(path)?)?;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        // The entry borrows the archive mutably, so the name is detached before reading.
        let name = entry.name().to_string();
        trace!("Found archive entry {name}");
        handler(&name, &mut entry)?;
    }

    Ok(())
}
