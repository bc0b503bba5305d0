//! The task registry and the built in tasks.

use colored::Colorize;
use log::info;
use stagehand_core::manifest::{Manifest, ManifestError, DEFAULT_MANIFEST};
use stagehand_core::stage::Stager;
use std::path::{Path, PathBuf};

use crate::error::ExecResult;

/// Context handed to every task when it runs.
#[derive(Debug, Default)]
pub struct TaskContext {
    /// Explicit manifest path from the command line.
    pub manifest: Option<PathBuf>,
}

impl TaskContext {
    /// Resolve the manifest the stage task should use.
    ///
    /// An explicit path wins, then `stagehand.toml` in the working directory,
    /// then the built in vendored defaults.
    pub fn manifest(&self) -> Result<Manifest, ManifestError> {
        match &self.manifest {
            Some(path) => Manifest::load(path),
            None if Path::new(DEFAULT_MANIFEST).exists() => Manifest::load(DEFAULT_MANIFEST),
            None => Ok(Manifest::vendored_defaults()),
        }
    }
}

/// A named unit of work runnable from the command line.
pub trait Task {
    /// The name the task is requested by.
    fn name(&self) -> &'static str;

    /// One line shown by the tasks report.
    fn description(&self) -> &'static str;

    /// Perform the task.
    fn run(&self, registry: &TaskRegistry, context: &TaskContext) -> ExecResult;
}

/// All registered tasks.
pub struct TaskRegistry {
    tasks: Vec<Box<dyn Task>>,
}

impl TaskRegistry {
    /// The registry containing the built in tasks.
    pub fn with_default_tasks() -> Self {
        Self {
            tasks: vec![Box::new(StageTask), Box::new(TasksReport)],
        }
    }

    /// Find a task by name.
    pub fn find(&self, name: &str) -> Option<&dyn Task> {
        self.tasks().find(|task| task.name() == name)
    }

    /// Every registered task, in registration order.
    pub fn tasks(&self) -> impl Iterator<Item = &dyn Task> {
        self.tasks.iter().map(|task| task.as_ref())
    }
}

/// Stages vendored assets according to the manifest.
#[derive(Debug, Default)]
pub struct StageTask;

impl Task for StageTask {
    fn name(&self) -> &'static str {
        "stage"
    }

    fn description(&self) -> &'static str {
        "Copy vendored assets into the public asset tree"
    }

    fn run(&self, _registry: &TaskRegistry, context: &TaskContext) -> ExecResult {
        let manifest = context.manifest()?;
        let report = Stager::new(manifest.into_rules()).run()?;
        info!("{} file(s) staged", report.total_copied());
        Ok(())
    }
}

/// Lists the registered tasks.
#[derive(Debug, Default)]
pub struct TasksReport;

impl Task for TasksReport {
    fn name(&self) -> &'static str {
        "tasks"
    }

    fn description(&self) -> &'static str {
        "List the tasks runnable from the command line"
    }

    fn run(&self, registry: &TaskRegistry, _context: &TaskContext) -> ExecResult {
        for task in registry.tasks() {
            println!("{} - {}", task.name().bold(), task.description());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_stage_and_tasks() {
        let registry = TaskRegistry::with_default_tasks();
        assert!(registry.find("stage").is_some());
        assert!(registry.find("tasks").is_some());
        assert!(registry.find("deploy").is_none());
    }

    #[test]
    fn context_without_manifest_falls_back_to_defaults() {
        let context = TaskContext::default();
        // no stagehand.toml in the test working directory
        let manifest = context.manifest().unwrap();
        assert_eq!(manifest, Manifest::vendored_defaults());
    }
}
