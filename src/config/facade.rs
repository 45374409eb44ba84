//! Config loader: one entry point for all config loading.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, project_file};
use super::LintConfig;
use crate::error::LintError;
use std::path::Path;
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for an analysis root.
    ///
    /// Precedence (lowest to highest): defaults, user config, `bearlint.toml`
    /// in the root, environment.
    pub fn load(root: &Path) -> Result<LintConfig, LintError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, root)?;
        let builder = environment::add_to_builder(builder);

        let config: LintConfig = builder.build()?.try_deserialize()?;
        debug!(sections = config.sections.len(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping user and project
    /// files. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<LintConfig, LintError> {
        let builder = builder_with_defaults()?;
        let builder = project_file::add_explicit(builder, path)?;
        let builder = environment::add_to_builder(builder);

        let config: LintConfig = builder.build()?.try_deserialize()?;
        debug!(
            config_path = %path.display(),
            sections = config.sections.len(),
            "Configuration loaded from file"
        );
        Ok(config)
    }

    /// Explicit file when given, root lookup otherwise.
    pub fn load_for(root: &Path, explicit: Option<&Path>) -> Result<LintConfig, LintError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load(root),
        }
    }
}
