//! Bears shipped with bearlint.

use super::Bear;
use crate::config::BearSettings;
use crate::results::{LintResult, Severity, SourceFile};

/// Flags lines mentioning a keyword such as `TODO` or `FIXME`.
///
/// Settings: `keywords` (list, default `["TODO", "FIXME"]`).
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordBear;

impl Bear for KeywordBear {
    fn name(&self) -> &str {
        "KeywordBear"
    }

    fn description(&self) -> &str {
        "Flags lines containing configured keywords"
    }

    fn run(&self, file: &SourceFile, settings: &BearSettings) -> anyhow::Result<Vec<LintResult>> {
        let keywords = settings.get_string_list("keywords", &["TODO", "FIXME"])?;
        let lowered: Vec<(String, &String)> =
            keywords.iter().map(|k| (k.to_lowercase(), k)).collect();

        let mut results = Vec::new();
        for (number, line) in file.numbered_lines() {
            let haystack = line.to_lowercase();
            for (needle, keyword) in &lowered {
                if haystack.contains(needle.as_str()) {
                    results.push(LintResult::at_line(
                        self.name(),
                        &file.path,
                        number,
                        Severity::Normal,
                        format!("The line contains the keyword '{}'.", keyword),
                    ));
                }
            }
        }
        Ok(results)
    }
}

/// Flags lines longer than `max_line_length` characters (default 79).
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLengthBear;

impl Bear for LineLengthBear {
    fn name(&self) -> &str {
        "LineLengthBear"
    }

    fn description(&self) -> &str {
        "Flags lines longer than max_line_length"
    }

    fn run(&self, file: &SourceFile, settings: &BearSettings) -> anyhow::Result<Vec<LintResult>> {
        let max = settings.get_usize("max_line_length", 79)?;
        Ok(file
            .numbered_lines()
            .filter_map(|(number, line)| {
                let length = line.chars().count();
                (length > max).then(|| {
                    LintResult::at_line(
                        self.name(),
                        &file.path,
                        number,
                        Severity::Normal,
                        format!("Line is longer than allowed. ({} > {})", length, max),
                    )
                })
            })
            .collect())
    }
}

/// Flags trailing whitespace and, with `use_spaces` (default true), tab
/// indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceConsistencyBear;

impl Bear for SpaceConsistencyBear {
    fn name(&self) -> &str {
        "SpaceConsistencyBear"
    }

    fn description(&self) -> &str {
        "Flags trailing whitespace and tab indentation"
    }

    fn run(&self, file: &SourceFile, settings: &BearSettings) -> anyhow::Result<Vec<LintResult>> {
        let use_spaces = settings.get_bool("use_spaces", true)?;

        let mut results = Vec::new();
        for (number, line) in file.numbered_lines() {
            if line.ends_with(is_blank) {
                results.push(LintResult::at_line(
                    self.name(),
                    &file.path,
                    number,
                    Severity::Info,
                    "Line contains trailing whitespace.",
                ));
            }
            let indent = &line[..line.len() - line.trim_start_matches(is_blank).len()];
            if use_spaces && indent.contains('\t') {
                results.push(LintResult::at_line(
                    self.name(),
                    &file.path,
                    number,
                    Severity::Info,
                    "Line is indented with tabs, spaces are expected.",
                ));
            }
        }
        Ok(results)
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}
