//! Merge rules: defaults and override order.
//!
//! Later sources win: defaults, user config, project or explicit config file,
//! then environment.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
