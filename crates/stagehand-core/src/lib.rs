//! Core types for staging vendored assets into a public directory tree.
//!
//! A [`Manifest`] declares a list of [`CopyRule`]s. The [`Stager`] evaluates
//! each rule's glob patterns against the rule's source directory and mirrors
//! every matched file beneath the rule's destination, preserving relative
//! paths.

pub mod error;
pub mod file_set;
pub mod logging;
pub mod manifest;
pub mod rule;
pub mod stage;

pub use error::{StageError, StageResult};
pub use file_set::FileSet;
pub use manifest::Manifest;
pub use rule::CopyRule;
pub use stage::{StageReport, Stager};
