use std::io::Write;
use std::path::Path;

use tracing::{debug, trace};

use crate::fs::FileSystem;
use crate::models::FsEntry;

use super::ignore::PatternSet;
use super::render::{nested_indent, write_line};

/// Version-control metadata directory, hidden regardless of ignore files.
pub const VCS_DIR_NAME: &str = ".git";

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Whether to show only directories
    pub dirs_only: bool,
}

/// Print the contents of `dir` depth-first, one entry per line prefixed by `indent`.
///
/// Lines are written as they are produced. A directory that cannot be listed
/// aborts the whole walk; whatever was already written stays in `writer`.
pub async fn print_tree<F: FileSystem, W: Write>(
    fs: &F,
    dir: &Path,
    indent: &str,
    options: &WalkOptions,
    patterns: &PatternSet,
    writer: &mut W,
) -> anyhow::Result<()> {
    let entries = fs.read_dir(dir).await?;
    debug!(dir = %dir.display(), entries = entries.len(), "listed directory");

    let entries = visible_entries(entries, options, patterns);
    let child_indent = nested_indent(indent);

    for entry in entries {
        write_line(writer, indent, &entry.name)?;

        if entry.is_dir() {
            Box::pin(print_tree(
                fs,
                &entry.path,
                &child_indent,
                options,
                patterns,
                writer,
            ))
            .await?;
        }
    }

    Ok(())
}

/// Drop hidden entries and sort the rest byte-wise by name.
fn visible_entries(
    entries: Vec<FsEntry>,
    options: &WalkOptions,
    patterns: &PatternSet,
) -> Vec<FsEntry> {
    let mut visible: Vec<FsEntry> = entries
        .into_iter()
        .filter(|entry| {
            if entry.name == VCS_DIR_NAME {
                return false;
            }

            if patterns.is_ignored(&entry.path, entry.is_dir()) {
                trace!(path = %entry.path.display(), "ignored by pattern");
                return false;
            }

            !options.dirs_only || entry.is_dir()
        })
        .collect();

    visible.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
    visible
}
