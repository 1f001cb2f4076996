// src/core/walker/filesystem.rs

//! Directory enumeration, the walker's only platform dependency.

use std::fs;
use std::io;

/// One directory entry: the final path component (never containing a
/// separator) and its kind. Symlinks are not followed, so a symlink to a
/// directory is a file-class entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// The walker's view of the platform: stat a path and enumerate one
/// directory. Implementations may return entries in any order (the
/// walker sorts) and may or may not include `.` and `..`.
pub trait Filesystem {
    /// Whether `path` names a directory, following symlinks as stat does.
    fn is_dir(&self, path: &str) -> io::Result<bool>;

    /// The entries of the directory at `path`.
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn is_dir(&self, path: &str) -> io::Result<bool> {
        Ok(fs::metadata(path)?.is_dir())
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // an entry whose type cannot be read is dropped rather than
            // failing the whole directory
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }
}
