//! Loading copy rules from a `stagehand.toml` manifest.

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rule::{CopyRule, Patterns};

/// The manifest file looked up in the working directory when no explicit
/// path is given.
pub const DEFAULT_MANIFEST: &str = "stagehand.toml";

/// Errors raised while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
    /// Copying without relative-path expansion is not supported.
    #[error("rule for {0:?} disables expansion")]
    ExpandDisabled(String),
}

/// A declarative, immutable list of copy rules.
///
/// Built once at process start and handed to the [`Stager`](crate::Stager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "rule", default)]
    rules: Vec<CopyRule>,
}

impl Manifest {
    /// Read a manifest from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        fs::read_to_string(path)?.parse()
    }

    /// The rules staging this project's vendored front-end libraries into
    /// the public asset tree.
    pub fn vendored_defaults() -> Self {
        let external = Path::new("resources/public/dist/external");
        Self {
            rules: vec![
                CopyRule::new("node_modules/jquery/dist", "*", external.join("jquery")),
                CopyRule::new(
                    "node_modules/bootstrap-datepicker/dist",
                    "**/*",
                    external.join("bootstrap-datepicker"),
                ),
                CopyRule::new(
                    "node_modules/bootstrap/dist",
                    "**/*",
                    external.join("bootstrap"),
                ),
                CopyRule::new(
                    "node_modules/js-joda/dist",
                    "**/*",
                    external.join("js-joda"),
                ),
                CopyRule::new(
                    "node_modules/font-awesome",
                    Patterns::Many(vec!["css/**/*".to_string(), "fonts/**/*".to_string()]),
                    external.join("font-awesome"),
                ),
            ],
        }
    }

    /// The rules in declaration order.
    pub fn rules(&self) -> &[CopyRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<CopyRule> {
        self.rules
    }

    fn validate(self) -> Result<Self, ManifestError> {
        if let Some(rule) = self.rules.iter().find(|rule| !rule.expand) {
            return Err(ManifestError::ExpandDisabled(
                rule.cwd.display().to_string(),
            ));
        }
        Ok(self)
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let manifest: Manifest = toml::from_str(s)?;
        manifest.validate()
    }
}
