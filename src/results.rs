//! Analysis results and the source files bears look at.

use crate::error::LintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Normal,
    Major,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "INFO",
            Severity::Normal => "NORMAL",
            Severity::Major => "MAJOR",
        };
        f.write_str(label)
    }
}

/// A single finding produced by a bear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// Name of the bear that produced the result
    pub origin: String,
    pub message: String,
    pub file: PathBuf,
    /// 1-based line number, absent for whole-file findings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub severity: Severity,
}

impl LintResult {
    pub fn at_line(
        origin: &str,
        file: &Path,
        line: usize,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.to_string(),
            message: message.into(),
            file: file.to_path_buf(),
            line: Some(line),
            severity,
        }
    }
}

/// A file read once and shared by every bear in a section.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self, LintError> {
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_content(path, &content))
    }

    pub fn from_content(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Lines paired with their 1-based numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| (index + 1, line.as_str()))
    }
}
