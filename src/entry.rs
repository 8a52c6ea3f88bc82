use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// One immediate child of the browsed directory, snapshotted at refresh time.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub extension: String,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = fs::metadata(&path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Some(Self {
            path,
            name,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::now()),
            extension,
        })
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self.extension.as_str(), "md" | "markdown")
    }

    pub fn icon(&self) -> &str {
        if self.is_dir {
            return "📁";
        }
        if self.is_markdown() {
            return "📝";
        }
        "📄"
    }

    /// Size and modification time, for the explorer hover text.
    pub fn detail(&self) -> String {
        let datetime: DateTime<Local> = self.modified.into();
        if self.is_dir {
            format!("Modified: {}", datetime.format("%Y-%m-%d %H:%M"))
        } else {
            format!(
                "{} · {}",
                bytesize::ByteSize(self.size),
                datetime.format("%Y-%m-%d %H:%M")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# hello").unwrap();

        let entry = FileEntry::from_path(path.clone()).unwrap();
        assert_eq!(entry.name, "notes.md");
        assert_eq!(entry.extension, "md");
        assert!(!entry.is_dir);
        assert!(entry.is_markdown());
        assert_eq!(entry.size, 7);
        assert_eq!(entry.icon(), "📝");
    }

    #[test]
    fn test_entry_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs");
        fs::create_dir(&path).unwrap();

        let entry = FileEntry::from_path(path).unwrap();
        assert!(entry.is_dir);
        assert_eq!(entry.icon(), "📁");
    }

    #[test]
    fn test_entry_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileEntry::from_path(dir.path().join("gone")).is_none());
    }

    #[test]
    fn test_extension_is_lowercased() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NOTES.MD");
        fs::write(&path, "").unwrap();

        let entry = FileEntry::from_path(path).unwrap();
        assert_eq!(entry.extension, "md");
        assert!(entry.is_markdown());
    }
}
