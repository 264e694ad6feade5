use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut read_dir = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("open {}", dir.display()))?;

        let mut entries = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .with_context(|| format!("read {}", dir.display()))?
        {
            let file_type = entry
                .file_type()
                .await
                .with_context(|| format!("stat {}", entry.path().display()))?;
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(FsEntry {
                path: entry.path(),
                name: entry.file_name(),
                kind,
            });
        }
        Ok(entries)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::metadata(path).await {
            Ok(_) => true,
            Err(err) => err.kind() != ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn classifies_entry_kinds() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dir")).unwrap();
        std::fs::write(temp.path().join("file"), "x").unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(temp.path().join("dir"), temp.path().join("link")).unwrap();

        let mut entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries[0].name, "dir");
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].name, "file");
        assert_eq!(entries[1].kind, EntryKind::File);
        #[cfg(unix)]
        {
            assert_eq!(entries[2].name, "link");
            assert_eq!(entries[2].kind, EntryKind::Symlink);
            assert!(!entries[2].is_dir());
        }
    }

    #[tokio::test]
    async fn read_dir_on_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(RealFileSystem.read_dir(&file).await.is_err());
    }

    #[tokio::test]
    async fn read_to_string_replaces_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(".gitignore");
        std::fs::write(&file, b"# caf\xe9 notes\n*.log\n").unwrap();

        let contents = RealFileSystem.read_to_string(&file).await.unwrap();
        assert_eq!(contents, "# caf\u{FFFD} notes\n*.log\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn keeps_non_utf8_names_intact() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9");
        if std::fs::write(temp.path().join(name), "x").is_err() {
            // Some filesystems only accept UTF-8 names.
            return;
        }

        let entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        assert_eq!(entries[0].name.as_bytes(), b"caf\xe9");
    }

    #[tokio::test]
    async fn exists_reports_missing_paths() {
        let temp = TempDir::new().unwrap();
        assert!(RealFileSystem.exists(temp.path()).await);
        assert!(!RealFileSystem.exists(&temp.path().join("nope")).await);
    }
}
