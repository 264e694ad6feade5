pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::core::render::{INDENT_STEP, write_line};
use crate::core::{PatternSet, WalkOptions, print_tree};
use crate::error::RunError;
use crate::fs::FileSystem;

/// Make `path` absolute against the working directory and fold away `.` and `..`
/// components without touching the filesystem. An empty path means the working directory.
pub fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path)?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Label for the first output line: the final component, or the whole path at the root.
pub fn root_display_name(root_path: &Path) -> &OsStr {
    root_path.file_name().unwrap_or(root_path.as_os_str())
}

/// Resolve `target`, collect its ignore patterns, and print the tree to `writer`.
pub async fn run<F: FileSystem, W: Write>(
    fs: &F,
    target: &Path,
    options: &WalkOptions,
    writer: &mut W,
) -> Result<(), RunError> {
    let root = resolve_target(target).map_err(RunError::Resolve)?;

    if !fs.exists(&root).await {
        return Err(RunError::Missing(root));
    }

    let patterns = PatternSet::collect(fs, &root).await;
    info!(root = %root.display(), patterns = patterns.len(), "starting walk");

    write_line(writer, "", root_display_name(&root))
        .map_err(|err| RunError::Traverse(err.into()))?;
    print_tree(fs, &root, INDENT_STEP, options, &patterns, writer)
        .await
        .map_err(RunError::Traverse)?;

    writer
        .flush()
        .map_err(|err| RunError::Traverse(err.into()))
}
