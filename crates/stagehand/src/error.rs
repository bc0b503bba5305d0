//! Errors surfaced by the command line.

use stagehand_core::error::StageError;
use stagehand_core::manifest::ManifestError;

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// A task was requested that is not registered.
    #[error("unknown task {0:?} (run the tasks task to list available tasks)")]
    UnknownTask(String),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Stage(#[from] StageError),
}

pub type ExecResult<T = ()> = Result<T, ExecError>;
