use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: OsString,
    pub kind: EntryKind,
}

impl FsEntry {
    /// Symlinks are never treated as directories, even when they point at one.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
