//! Copy rules map glob patterns under a source directory to a destination.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::StageResult;
use crate::file_set::FileSet;

/// One or more glob patterns, evaluated relative to a rule's source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    Single(String),
    Many(Vec<String>),
}

impl Patterns {
    /// The individual pattern strings.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Patterns::Single(pattern) => std::slice::from_ref(pattern),
            Patterns::Many(patterns) => patterns.as_slice(),
        }
    }

    /// Iterate over the individual pattern strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().map(String::as_str)
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Patterns::Single(pattern.to_string())
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Patterns::Many(patterns)
    }
}

/// A declarative instruction mapping glob patterns under a source directory
/// to a destination directory.
///
/// Patterns are evaluated relative to `cwd`. The relative path of every
/// matched file is re-rooted unchanged under `dest`. Rules are independent of
/// each other; their order only decides which rule wins when two rules write
/// the same destination path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRule {
    /// The source root the patterns are evaluated against.
    pub cwd: PathBuf,
    /// Glob patterns selecting files beneath `cwd`.
    pub src: Patterns,
    /// The destination root matched files are copied beneath.
    pub dest: PathBuf,
    /// Preserve the relative path of each match under `dest`.
    #[serde(default = "default_expand")]
    pub expand: bool,
}

fn default_expand() -> bool {
    true
}

impl CopyRule {
    /// Create a rule with relative-path expansion enabled.
    pub fn new(
        cwd: impl Into<PathBuf>,
        src: impl Into<Patterns>,
        dest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cwd: cwd.into(),
            src: src.into(),
            dest: dest.into(),
            expand: true,
        }
    }

    /// The file set selected by this rule's patterns.
    pub fn file_set(&self) -> StageResult<FileSet> {
        FileSet::new(&self.cwd, self.src.iter())
    }
}
