// Document session - the open file, its edit buffer and the dirty flag
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The edit buffer and the file backing it, if any.
///
/// `current_file` is only ever set after a successful open or save-as, and
/// Save stays a quiet no-op until then.
pub struct DocumentSession {
    current_file: Option<PathBuf>,
    pub buffer: String,
    dirty: bool,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self {
            current_file: None,
            buffer: String::new(),
            dirty: false,
        }
    }

    pub fn has_backing_file(&self) -> bool {
        self.current_file.is_some()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Name of the backing file, for the window title.
    pub fn file_name(&self) -> Option<String> {
        self.current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The shell calls this when the edit widget reports a change.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replace the buffer with the contents of `path`.
    ///
    /// The read happens before anything is committed, so a failure leaves
    /// the previous buffer and backing file intact.
    pub fn open(&mut self, path: PathBuf) -> Result<()> {
        let text = fs::read_to_string(&path).map_err(|e| Error::read(&path, e))?;
        self.buffer = text;
        self.current_file = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Flush the buffer to the backing file. Without one this is a no-op,
    /// not an error: Save is only reachable once a file is loaded or the
    /// document went through Save As.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.current_file.clone() else {
            return Ok(());
        };
        fs::write(&path, &self.buffer).map_err(|e| Error::write(&path, e))?;
        self.dirty = false;
        Ok(())
    }

    /// Flush the buffer to `path` and make it the backing file.
    pub fn save_as(&mut self, path: PathBuf) -> Result<()> {
        fs::write(&path, &self.buffer).map_err(|e| Error::write(&path, e))?;
        self.current_file = Some(path);
        self.dirty = false;
        Ok(())
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive `.md` suffix check for chosen save names. A miss only
/// warns; the save itself still goes through.
pub fn is_markdown_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".md")
}
