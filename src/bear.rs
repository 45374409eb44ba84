//! Bears: pluggable analysis units.
//!
//! A bear declares the requirements it needs installed and produces
//! [`LintResult`]s for one file at a time. Bears are looked up by name in a
//! [`BearRegistry`]; a section's bears have their prerequisites checked before
//! any file is read.

use crate::config::BearSettings;
use crate::error::LintError;
use crate::results::{LintResult, SourceFile};

mod builtin;
mod registry;
mod requirement;

pub use builtin::{KeywordBear, LineLengthBear, SpaceConsistencyBear};
pub use registry::BearRegistry;
pub use requirement::{ExecutableRequirement, Requirement};

/// An analysis plugin.
pub trait Bear {
    /// Name used for selection (`-b <name>`) and as result origin.
    fn name(&self) -> &str;

    /// One-line description shown by `--show-bears`.
    fn description(&self) -> &str {
        ""
    }

    /// Requirements that must be installed before the bear may run.
    fn requirements(&self) -> Vec<Box<dyn Requirement>> {
        Vec::new()
    }

    /// Analyze one file. Errors are the bear's own and are propagated as-is.
    fn run(&self, file: &SourceFile, settings: &BearSettings) -> anyhow::Result<Vec<LintResult>>;
}

/// Fail with [`LintError::RequirementsNotMet`] when any requirement of `bear`
/// is not installed.
pub fn check_prerequisites(bear: &dyn Bear) -> Result<(), LintError> {
    let missing: Vec<String> = bear
        .requirements()
        .iter()
        .filter(|requirement| !requirement.is_installed())
        .map(|requirement| requirement.name())
        .collect();

    if missing.is_empty() {
        tracing::debug!(bear = bear.name(), "All requirements installed");
        Ok(())
    } else {
        Err(LintError::RequirementsNotMet {
            bear: bear.name().to_string(),
            missing,
        })
    }
}
