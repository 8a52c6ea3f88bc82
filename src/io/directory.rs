use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::FileEntry;
use crate::error::{Error, Result};

/// Snapshot the immediate children of `path`.
///
/// Hidden (dot-prefixed) entries are skipped unless `show_hidden` is set.
/// Directories sort before files, then case-insensitive by name.
pub fn read_directory(path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>> {
    let read_dir = fs::read_dir(path).map_err(|e| Error::io(path, e))?;

    let mut entries = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !show_hidden {
            if let Some(name) = path.file_name() {
                if name.to_string_lossy().starts_with('.') {
                    continue;
                }
            }
        }
        if let Some(file_entry) = FileEntry::from_path(path) {
            entries.push(file_entry);
        }
    }

    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}

/// Classify a path as directory or file.
pub fn is_directory(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(metadata.is_dir())
}

/// Resolve the user's home directory, the seed for browsing.
///
/// Failure here is a startup precondition violation; the caller exits.
pub fn home_directory() -> Result<PathBuf> {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| Error::Config("could not resolve home directory".to_string()))
}
