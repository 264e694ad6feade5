use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::WalkOptions;

#[derive(Parser, Debug)]
#[command(name = "gtree", version)]
#[command(about = "Print a directory tree, skipping entries matched by ancestor .gitignore files", long_about = None)]
pub struct Cli {
    /// Root path to print (defaults to current directory)
    pub path: Option<OsString>,

    /// Show directories only
    #[arg(short = 'f')]
    pub dirs_only: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn target(&self) -> PathBuf {
        self.path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            dirs_only: self.dirs_only,
        }
    }
}
