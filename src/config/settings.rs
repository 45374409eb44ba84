//! Bear settings: loosely typed values read by bears with typed accessors.

use crate::error::LintError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Section settings. Values may arrive as strings from environment
/// overrides, so every accessor also accepts the string spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearSettings(BTreeMap<String, Value>);

impl BearSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_usize(&self, key: &str, default: usize) -> Result<usize, LintError> {
        let invalid = || LintError::InvalidSetting {
            key: key.to_string(),
            expected: "a non-negative integer",
        };
        match self.get(key) {
            None => Ok(default),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(invalid),
            Some(Value::String(s)) => s.trim().parse().map_err(|_| invalid()),
            Some(_) => Err(invalid()),
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, LintError> {
        let invalid = || LintError::InvalidSetting {
            key: key.to_string(),
            expected: "a boolean",
        };
        match self.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(invalid()),
            },
            Some(_) => Err(invalid()),
        }
    }

    /// A list of strings, or a single comma separated string.
    pub fn get_string_list(&self, key: &str, default: &[&str]) -> Result<Vec<String>, LintError> {
        let invalid = || LintError::InvalidSetting {
            key: key.to_string(),
            expected: "a list of strings",
        };
        match self.get(key) {
            None => Ok(default.iter().map(|s| s.to_string()).collect()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
                .collect(),
            Some(Value::String(s)) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()),
            Some(_) => Err(invalid()),
        }
    }
}
