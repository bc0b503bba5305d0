//! File sets select regular files beneath a root directory with glob
//! patterns.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use itertools::Itertools;
use walkdir::WalkDir;

use crate::error::{StageError, StageResult};

/// Path separators are matched literally, so `*` selects within a single
/// directory and only `**` descends into subdirectories.
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// A filter over relative paths.
pub trait Spec {
    fn accept(&self, value: &Path) -> bool;
}

impl Spec for Pattern {
    fn accept(&self, value: &Path) -> bool {
        self.matches_path_with(value, match_options())
    }
}

/// Accepts a path when any of its patterns accepts it.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile a set of pattern strings.
    pub fn compile<'p, I>(patterns: I) -> StageResult<Self>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| StageError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<StageResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }
}

impl Spec for PatternSet {
    fn accept(&self, value: &Path) -> bool {
        self.patterns.iter().any(|pattern| pattern.accept(value))
    }
}

/// The regular files beneath a root whose relative paths match a pattern set.
///
/// Directories are traversed but never yielded. A file set selecting nothing
/// is empty, not an error.
#[derive(Debug, Clone)]
pub struct FileSet {
    root: PathBuf,
    filter: PatternSet,
}

impl FileSet {
    /// Create a file set from a root directory and pattern strings.
    pub fn new<'p, I>(root: impl AsRef<Path>, patterns: I) -> StageResult<Self>
    where
        I: IntoIterator<Item = &'p str>,
    {
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            filter: PatternSet::compile(patterns)?,
        })
    }

    /// The root the patterns are evaluated against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths of every matched file, sorted.
    pub fn relative_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .filter(|relative| self.filter.accept(relative))
            .sorted()
            .collect()
    }

    /// Absolute paths of every matched file.
    pub fn files(&self) -> HashSet<PathBuf> {
        self.relative_files()
            .into_iter()
            .map(|relative| self.root.join(relative))
            .collect()
    }

    /// Whether this set selects no files.
    pub fn is_empty(&self) -> bool {
        self.relative_files().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "a").unwrap();
        fs::write(dir.path().join("b.js"), "b").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.js"), "c").unwrap();
        dir
    }

    #[test]
    fn star_matches_only_direct_children() {
        let dir = sample_tree();
        let set = FileSet::new(dir.path(), ["*"]).unwrap();
        assert_eq!(
            set.relative_files(),
            vec![PathBuf::from("a.js"), PathBuf::from("b.js")]
        );
    }

    #[test]
    fn globstar_matches_every_depth() {
        let dir = sample_tree();
        let set = FileSet::new(dir.path(), ["**/*"]).unwrap();
        assert_eq!(
            set.relative_files(),
            vec![
                PathBuf::from("a.js"),
                PathBuf::from("b.js"),
                PathBuf::from("sub/c.js")
            ]
        );
    }

    #[test]
    fn many_patterns_select_their_union() {
        let dir = TempDir::new().unwrap();
        for sub in ["css", "fonts", "js"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
            fs::write(dir.path().join(sub).join("file"), sub).unwrap();
        }
        let set = FileSet::new(dir.path(), ["css/**/*", "fonts/**/*"]).unwrap();
        assert_eq!(
            set.relative_files(),
            vec![PathBuf::from("css/file"), PathBuf::from("fonts/file")]
        );
    }

    #[test]
    fn directories_are_never_yielded() {
        let dir = sample_tree();
        let set = FileSet::new(dir.path(), ["**/*"]).unwrap();
        assert!(set
            .relative_files()
            .iter()
            .all(|relative| dir.path().join(relative).is_file()));
    }

    #[test]
    fn empty_match_is_not_an_error() {
        let dir = sample_tree();
        let set = FileSet::new(dir.path(), ["*.css"]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn bad_pattern_is_reported() {
        let result = FileSet::new("anywhere", ["a[**"]);
        assert!(matches!(
            result,
            Err(StageError::InvalidPattern { pattern, .. }) if pattern == "a[**"
        ));
    }
}
