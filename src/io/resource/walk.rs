use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::TraverseError;

/// A regular file found by [`walk_dir`]: its `/`-separated name relative to the walk root,
/// and its on-disk path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
}

impl Resource {
    /// The resource's name relative to the walk root. Components are always joined with `/`,
    /// regardless of platform.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the underlying file for reading.
    pub fn open(&self) -> Result<File, TraverseError> {
        Ok(File::open(&self.path)?)
    }

    /// Reads the underlying file into a byte vector.
    pub fn read_bytes(&self) -> Result<Vec<u8>, TraverseError> {
        Ok(fs::read(&self.path)?)
    }

    /// Reads the underlying file into a UTF-8 string.
    pub fn read_to_string(&self) -> Result<String, TraverseError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Walks the directory tree under `root`, yielding a [`Resource`] for every regular file.
///
/// The walk is depth-first and each directory's entries are visited in name order, so the
/// sequence is deterministic for a given tree. Anything that is neither a regular file nor a
/// directory (sockets, broken links) is skipped. I/O failures on a subdirectory surface as
/// `Err` items without ending the walk of the rest.
pub fn walk_dir<P: AsRef<Path>>(root: P) -> Result<DirResources, TraverseError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(TraverseError::NotADirectory { path: root.to_path_buf() });
    }

    debug!("Walking resources under {}", root.display());
    Ok(DirResources {
        stack: vec![(String::new(), root.to_path_buf())],
    })
}

/// The iterator returned by [`walk_dir`].
pub struct DirResources {
    /// Depth-first work list. Directories are expanded when they surface; entries are pushed
    /// in reverse name order so they pop in name order.
    pub(crate) stack: Vec<(String, PathBuf)>,
}

impl Iterator for DirResources {
    type Item = Result<Resource, TraverseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((name, path)) = self.stack.pop() {
            if path.is_dir() {
                debug!("Entering directory {}", path.display());
                match read_sorted(&path) {
                    Ok(children) => {
                        for (child_name, child_path) in children.into_iter().rev() {
                            let child_rel = if name.is_empty() {
                                child_name
                            } else {
                                format!("{name}/{child_name}")
                            };
                            self.stack.push((child_rel, child_path));
                        }
                    },
                    Err(error) => return Some(Err(error.into())),
                }
            } else if path.is_file() {
                trace!("Found resource {name}");
                return Some(Ok(Resource { name, path }));
            }
        }

        None
    }
}

/// Reads a directory's entries, sorted by file name for deterministic traversal.
fn read_sorted(path: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut children = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        children.push((name, entry.path()));
    }

    children.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(children)
}
