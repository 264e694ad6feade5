mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the immediate children of `dir`, in whatever order the platform yields them.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Invalid UTF-8 sequences are replaced rather than rejected.
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Follows symlinks. Only a definite "not found" reports `false`.
    async fn exists(&self, path: &Path) -> bool;
}
