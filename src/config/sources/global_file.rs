//! User-level config file: `$XDG_CONFIG_HOME/bearlint/config.toml` on Linux,
//! the platform config directory elsewhere.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the user-level config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bearlint").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the user-level config file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.is_file() => {
            debug!(config_path = %path.display(), "Loading user config");
            Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
        }
        _ => Ok(builder),
    }
}
