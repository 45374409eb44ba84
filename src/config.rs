//! Configuration System
//!
//! Layered configuration: merge policy defaults, the user-level config file,
//! the project `bearlint.toml` (or an explicit `--config` file) and finally
//! `BEARLINT_*` environment overrides. Command-line targeting is applied last,
//! on top of the loaded sections.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

mod facade;
mod merge;
mod settings;
mod sources;

pub use facade::ConfigLoader;
pub use settings::BearSettings;

/// Name of the section built from command-line targeting.
pub const CLI_SECTION: &str = "cli";

/// Name of the section command-line targeting inherits from.
pub const DEFAULT_SECTION: &str = "default";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Analysis sections keyed by name; run in name order
    #[serde(default)]
    pub sections: BTreeMap<String, SectionConfig>,
}

/// One analysis section: which files, which bears, which settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Glob patterns of files to analyze
    #[serde(default, deserialize_with = "string_list")]
    pub files: Vec<String>,

    /// Glob patterns of files to skip
    #[serde(default, deserialize_with = "string_list")]
    pub ignore: Vec<String>,

    /// Bear names, run in the given order
    #[serde(default, deserialize_with = "string_list")]
    pub bears: Vec<String>,

    /// Free-form settings handed to every bear of the section
    #[serde(default)]
    pub settings: BearSettings,
}

/// Accept a list or a comma-separated string, as environment overrides of
/// any section arrive as plain strings.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringList {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match StringList::deserialize(deserializer)? {
        StringList::List(items) => items,
        StringList::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
    })
}

/// A section ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub config: SectionConfig,
}

/// Files, ignores and bears given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliTargeting {
    pub files: Vec<String>,
    pub ignore: Vec<String>,
    pub bears: Vec<String>,
}

impl CliTargeting {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.ignore.is_empty() && self.bears.is_empty()
    }
}

impl LintConfig {
    /// Resolve the sections to run.
    ///
    /// With command-line targeting a single `cli` section is produced from the
    /// `default` section with every given field replaced. Otherwise every
    /// configured section runs, in name order.
    pub fn resolve_sections(&self, targeting: &CliTargeting) -> Vec<Section> {
        if targeting.is_empty() {
            return self
                .sections
                .iter()
                .map(|(name, config)| Section {
                    name: name.clone(),
                    config: config.clone(),
                })
                .collect();
        }

        let mut config = self
            .sections
            .get(DEFAULT_SECTION)
            .cloned()
            .unwrap_or_default();
        if !targeting.files.is_empty() {
            config.files = targeting.files.clone();
        }
        if !targeting.ignore.is_empty() {
            config.ignore = targeting.ignore.clone();
        }
        if !targeting.bears.is_empty() {
            config.bears = targeting.bears.clone();
        }

        vec![Section {
            name: CLI_SECTION.to_string(),
            config,
        }]
    }
}
