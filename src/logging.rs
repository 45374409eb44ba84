//! Logging System
//!
//! Structured logging built on `tracing`. Logs go to stderr by default so that
//! rendered results on stdout (JSON mode in particular) stay machine readable.

use crate::error::LintError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration, the `[logging]` table of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, stdout
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. `BEARLINT_LOG` (full filter directive)
/// 2. `BEARLINT_LOG_FORMAT` / `BEARLINT_LOG_OUTPUT`
/// 3. The given config (already merged with CLI flags by the caller)
/// 4. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), LintError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let writer = determine_writer(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| LintError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, LintError> {
    if let Ok(filter) = EnvFilter::try_from_env("BEARLINT_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| LintError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, LintError> {
    if let Ok(format) = std::env::var("BEARLINT_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(LintError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

fn determine_writer(config: Option<&LoggingConfig>) -> Result<BoxMakeWriter, LintError> {
    let output = match std::env::var("BEARLINT_LOG_OUTPUT") {
        Ok(output) => output,
        Err(_) => config
            .map(|c| c.output.clone())
            .unwrap_or_else(default_output),
    };
    parse_output(&output)
}

fn parse_output(output: &str) -> Result<BoxMakeWriter, LintError> {
    match output {
        "stderr" => Ok(BoxMakeWriter::new(std::io::stderr)),
        "stdout" => Ok(BoxMakeWriter::new(std::io::stdout)),
        _ => Err(LintError::ConfigError(format!(
            "Invalid log output: {} (must be 'stderr' or 'stdout')",
            output
        ))),
    }
}
