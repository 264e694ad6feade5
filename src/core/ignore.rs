use std::path::Path;

use regex::Regex;
use tracing::{debug, trace};

use crate::fs::FileSystem;

use super::glob;

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// One ignore line, compiled once at collection time.
struct Rule {
    raw: String,
    glob: Option<Regex>,
    /// Set only for patterns ending in `/`: the pattern with that slash removed.
    dir_glob: Option<Regex>,
}

impl Rule {
    fn new(raw: String) -> Self {
        let glob = glob::compile(&raw);
        let dir_glob = raw.strip_suffix('/').and_then(glob::compile);
        if glob.is_none() && dir_glob.is_none() {
            debug!(pattern = %raw, "ignore pattern never matches");
        }

        Self {
            raw,
            glob,
            dir_glob,
        }
    }

    fn matches(&self, name: &str, is_dir: bool) -> bool {
        if self.glob.as_ref().is_some_and(|re| re.is_match(name)) {
            return true;
        }

        is_dir && self.dir_glob.as_ref().is_some_and(|re| re.is_match(name))
    }
}

/// Ignore patterns gathered from every `.gitignore` between a directory and the filesystem root.
///
/// Patterns are kept in collection order, closest directory first. Matching only
/// looks at the base name of a path, so order never changes the outcome.
#[derive(Default)]
pub struct PatternSet {
    rules: Vec<Rule>,
}

impl PatternSet {
    /// Build a set from raw ignore-file lines, dropping blanks and `#` comments.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(Rule::new(line.to_owned()))
                }
            })
            .collect();

        Self { rules }
    }

    /// Walk from `start` up to the filesystem root, reading each `.gitignore` on the way.
    ///
    /// Unreadable or missing files contribute nothing.
    pub async fn collect<F: FileSystem>(fs: &F, start: &Path) -> Self {
        let mut lines = Vec::new();
        let mut current = start;

        loop {
            let ignore_file = current.join(IGNORE_FILE_NAME);
            match fs.read_to_string(&ignore_file).await {
                Ok(contents) => {
                    let before = lines.len();
                    lines.extend(contents.lines().map(str::to_owned));
                    debug!(
                        path = %ignore_file.display(),
                        lines = lines.len() - before,
                        "loaded ignore file"
                    );
                }
                Err(err) => trace!(path = %ignore_file.display(), "skipping ignore file: {err:#}"),
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Self::from_lines(lines)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.raw.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether any pattern matches the base name of `path`.
    ///
    /// A pattern with a trailing `/` additionally matches directories by the
    /// pattern's remaining text.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        self.rules.iter().any(|rule| rule.matches(&name, is_dir))
    }
}
