use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that end a run with exit status 1.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error resolving path: {0}")]
    Resolve(#[source] io::Error),

    #[error("Directory does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error("Error traversing directory: {0:#}")]
    Traverse(anyhow::Error),
}
