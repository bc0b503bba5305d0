//! Errors that abort a staging run

use std::io;
use std::path::PathBuf;

/// An error raised while staging files.
///
/// The first error encountered aborts the whole run. Files copied before the
/// failure are left in place.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The rule's source root does not exist or is not a directory.
    #[error("source directory not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// A destination directory or file could not be created or written.
    #[error("could not write to {}: {source}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rule carries a glob pattern that does not compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type StageResult<T = ()> = Result<T, StageError>;
