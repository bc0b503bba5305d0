//! The staging engine evaluates copy rules in order and mirrors matched
//! files beneath each rule's destination.

use std::fs;
use std::path::PathBuf;

use log::{debug, error, info};

use crate::error::{StageError, StageResult};
use crate::rule::CopyRule;

/// What a single rule copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub cwd: PathBuf,
    pub dest: PathBuf,
    pub copied: usize,
}

/// Summary of a completed staging run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    rules: Vec<RuleReport>,
}

impl StageReport {
    /// Per-rule results, in rule order.
    pub fn rules(&self) -> &[RuleReport] {
        &self.rules
    }

    /// Total number of files copied across all rules.
    pub fn total_copied(&self) -> usize {
        self.rules.iter().map(|rule| rule.copied).sum()
    }
}

/// Runs copy rules sequentially against the filesystem.
///
/// Rules run in order, so a later rule overwrites an earlier rule's file at
/// the same destination path. Staging is additive: destination files not
/// produced by any rule are left untouched. The run aborts on the first
/// failure, leaving already-copied files in place.
#[derive(Debug, Clone, Default)]
pub struct Stager {
    rules: Vec<CopyRule>,
}

impl Stager {
    pub fn new<I: IntoIterator<Item = CopyRule>>(rules: I) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Execute every rule in order.
    pub fn run(&self) -> StageResult<StageReport> {
        let mut report = StageReport::default();
        for rule in &self.rules {
            let copied = run_rule(rule).map_err(|e| {
                error!(
                    "staging {} -> {} failed: {}",
                    rule.cwd.display(),
                    rule.dest.display(),
                    e
                );
                e
            })?;
            info!(
                "staged {} file(s) from {} into {}",
                copied,
                rule.cwd.display(),
                rule.dest.display()
            );
            report.rules.push(RuleReport {
                cwd: rule.cwd.clone(),
                dest: rule.dest.clone(),
                copied,
            });
        }
        Ok(report)
    }
}

/// Copy every file the rule selects, creating destination directories as
/// needed. A rule selecting nothing copies nothing.
fn run_rule(rule: &CopyRule) -> StageResult<usize> {
    if !rule.cwd.is_dir() {
        return Err(StageError::SourceNotFound {
            path: rule.cwd.clone(),
        });
    }

    let mut copied = 0;
    for relative in rule.file_set()?.relative_files() {
        let from = rule.cwd.join(&relative);
        let to = rule.dest.join(&relative);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|source| StageError::DestinationWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::copy(&from, &to).map_err(|source| StageError::DestinationWrite {
            path: to.clone(),
            source,
        })?;
        debug!("{} -> {}", from.display(), to.display());
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn sample_source(root: &Path) {
        write(&root.join("a.js"), "a");
        write(&root.join("b.js"), "b");
        write(&root.join("sub").join("c.js"), "c");
    }

    #[test]
    fn star_stages_only_direct_children() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("lib/dist");
        let out = dir.path().join("out/lib");
        sample_source(&src);

        let report = Stager::new([CopyRule::new(&src, "*", &out)]).run().unwrap();

        assert!(out.join("a.js").is_file());
        assert!(out.join("b.js").is_file());
        assert!(!out.join("sub/c.js").exists());
        assert_eq!(report.total_copied(), 2);
    }

    #[test]
    fn globstar_preserves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("lib/dist");
        let out = dir.path().join("out/lib");
        sample_source(&src);

        let report = Stager::new([CopyRule::new(&src, "**/*", &out)])
            .run()
            .unwrap();

        assert!(out.join("a.js").is_file());
        assert!(out.join("b.js").is_file());
        assert!(out.join("sub/c.js").is_file());
        assert_eq!(report.total_copied(), 3);
    }

    #[test]
    fn staging_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        sample_source(&src);

        let stager = Stager::new([CopyRule::new(&src, "**/*", &out)]);
        let first = stager.run().unwrap();
        let second = stager.run().unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(out.join("sub/c.js")).unwrap(), "c");
    }

    #[test]
    fn later_rule_wins_destination_collisions() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        let out = dir.path().join("out");
        write(&first.join("shared.js"), "first");
        write(&second.join("shared.js"), "second");

        Stager::new([
            CopyRule::new(&first, "*", &out),
            CopyRule::new(&second, "*", &out),
        ])
        .run()
        .unwrap();

        assert_eq!(fs::read_to_string(out.join("shared.js")).unwrap(), "second");
    }

    #[test]
    fn unrelated_destination_files_are_untouched() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        sample_source(&src);
        write(&out.join("keep.txt"), "keep");

        Stager::new([CopyRule::new(&src, "*", &out)]).run().unwrap();

        assert_eq!(fs::read_to_string(out.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn missing_source_fails_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("does-not-exist");
        let out = dir.path().join("out");

        let result = Stager::new([CopyRule::new(&src, "*", &out)]).run();

        assert!(matches!(
            result,
            Err(StageError::SourceNotFound { path }) if path == src
        ));
        assert!(!out.exists());
    }

    #[test]
    fn zero_matches_is_a_silent_no_op() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir_all(&src).unwrap();

        let report = Stager::new([CopyRule::new(&src, "*.css", &out)])
            .run()
            .unwrap();

        assert_eq!(report.total_copied(), 0);
        assert!(!out.exists());
    }

    #[test]
    fn first_failure_aborts_remaining_rules() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good");
        let out = dir.path().join("out");
        write(&good.join("a.js"), "a");

        let result = Stager::new([
            CopyRule::new(dir.path().join("missing"), "*", &out),
            CopyRule::new(&good, "*", &out),
        ])
        .run();

        assert!(result.is_err());
        assert!(!out.join("a.js").exists(), "later rules must not run");
    }
}
