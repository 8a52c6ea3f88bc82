// Navigation state - the directory being browsed and its entry snapshot
use std::path::{Path, PathBuf};

use crate::entry::FileEntry;
use crate::error::Result;
use crate::io;

pub struct NavigationState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
}

/// What activating an explorer entry did.
pub enum Activation {
    /// Descended into a subdirectory; entries were repopulated.
    Descended,
    /// The entry is a file; navigation state is unchanged and the
    /// caller decides how to open it.
    File(PathBuf),
}

impl NavigationState {
    /// Seed browsing at `start_dir`. Entries stay empty until the first
    /// `refresh`, so a listing failure at startup surfaces like any other.
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            current_dir: start_dir,
            entries: Vec::new(),
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Re-list the current directory.
    ///
    /// On failure both the directory and the previous snapshot are kept, so
    /// the explorer stays on its last-known-good listing.
    pub fn refresh(&mut self, show_hidden: bool) -> Result<()> {
        let entries = io::read_directory(&self.current_dir, show_hidden)?;
        self.entries = entries;
        Ok(())
    }

    /// Move to the parent directory, committing only after a successful
    /// listing. At the filesystem root this is a no-op.
    pub fn navigate_up(&mut self, show_hidden: bool) -> Result<()> {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return Ok(());
        };
        let entries = io::read_directory(&parent, show_hidden)?;
        self.current_dir = parent;
        self.entries = entries;
        Ok(())
    }

    /// Resolve `name` against the current directory and act on it.
    ///
    /// Directories are entered and listed in one step: the target is listed
    /// first and only then committed, so a failed listing leaves the state
    /// untouched. Files are reported back without mutating anything.
    pub fn activate(&mut self, name: &str, show_hidden: bool) -> Result<Activation> {
        let target = self.current_dir.join(name);
        if io::is_directory(&target)? {
            let entries = io::read_directory(&target, show_hidden)?;
            self.current_dir = target;
            self.entries = entries;
            Ok(Activation::Descended)
        } else {
            Ok(Activation::File(target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_activate_descends_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("inner.md"), "").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();

        let mut nav = NavigationState::new(dir.path().to_path_buf());
        nav.refresh(false).unwrap();
        assert_eq!(nav.entries().len(), 2);

        assert!(matches!(
            nav.activate("docs", false).unwrap(),
            Activation::Descended
        ));
        assert_eq!(nav.current_dir(), dir.path().join("docs"));
        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.entries()[0].name, "inner.md");
    }

    #[test]
    fn test_activate_file_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();

        let mut nav = NavigationState::new(dir.path().to_path_buf());
        nav.refresh(false).unwrap();

        match nav.activate("readme.md", false).unwrap() {
            Activation::File(path) => assert_eq!(path, dir.path().join("readme.md")),
            Activation::Descended => panic!("file activation must not descend"),
        }
        assert_eq!(nav.current_dir(), dir.path());
        assert_eq!(nav.entries().len(), 1);
    }

    #[test]
    fn test_activate_missing_entry_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut nav = NavigationState::new(dir.path().to_path_buf());
        nav.refresh(false).unwrap();

        assert!(nav.activate("gone", false).is_err());
        assert_eq!(nav.current_dir(), dir.path());
    }

    #[test]
    fn test_navigate_up_returns_to_parent() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let mut nav = NavigationState::new(dir.path().to_path_buf());
        nav.refresh(false).unwrap();
        nav.activate("docs", false).unwrap();
        assert_eq!(nav.current_dir(), dir.path().join("docs"));

        nav.navigate_up(false).unwrap();
        assert_eq!(nav.current_dir(), dir.path());
        assert_eq!(nav.entries().len(), 1);
    }

    #[test]
    fn test_refresh_failure_keeps_last_known_good() {
        let base = tempfile::tempdir().unwrap();
        let browsed = base.path().join("browsed");
        fs::create_dir(&browsed).unwrap();
        fs::write(browsed.join("readme.md"), "").unwrap();

        let mut nav = NavigationState::new(browsed.clone());
        nav.refresh(false).unwrap();
        assert_eq!(nav.entries().len(), 1);

        fs::remove_dir_all(&browsed).unwrap();
        assert!(nav.refresh(false).is_err());
        assert_eq!(nav.current_dir(), browsed);
        assert_eq!(nav.entries().len(), 1, "snapshot must survive the failure");
    }
}
