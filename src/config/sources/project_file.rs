//! Project config file: `bearlint.toml` in the analysis root, or a file named
//! explicitly with `--config`.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// File name looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "bearlint.toml";

/// Add `<root>/bearlint.toml` to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if path.is_file() {
        debug!(config_path = %path.display(), "Loading project config");
        return add_explicit(builder, &path);
    }
    Ok(builder)
}

/// Add an explicitly named config file.
///
/// The content is read up front so that character devices such as
/// `/dev/null` work as an empty configuration.
pub fn add_explicit(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::Message(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
}
