//! Error types for bearlint.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by bearlint itself.
///
/// Bear failures are not wrapped in this type: a bear's own error travels
/// through `anyhow::Error` untouched so its type and message survive.
#[derive(Debug, Error)]
pub enum LintError {
    #[error(
        "The bear {bear} does not fulfill all requirements. {}",
        describe_missing(.missing)
    )]
    RequirementsNotMet { bear: String, missing: Vec<String> },

    #[error("No bear named '{0}' is registered. Run `bearlint --show-bears` to list bears.")]
    UnknownBear(String),

    #[error("Setting '{key}' must be {expected}")]
    InvalidSetting { key: String, expected: &'static str },

    #[error("Invalid file pattern '{pattern}': {message}")]
    Glob { pattern: String, message: String },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to render output: {0}")]
    Render(String),

    #[error("Debug supervisor has already run")]
    SupervisorReused,
}

impl From<config::ConfigError> for LintError {
    fn from(err: config::ConfigError) -> Self {
        LintError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for LintError {
    fn from(err: serde_json::Error) -> Self {
        LintError::Render(err.to_string())
    }
}

/// `'a' is not installed.` or `'a', 'b' and 'c' are not installed.`
fn describe_missing(missing: &[String]) -> String {
    let quoted: Vec<String> = missing.iter().map(|name| format!("'{}'", name)).collect();
    match quoted.as_slice() {
        [] => "No requirement is missing.".to_string(),
        [only] => format!("{} is not installed.", only),
        [init @ .., last] => format!("{} and {} are not installed.", init.join(", "), last),
    }
}
