//! Presentation: text, JSON and table renderings of section reports.

use crate::bear::BearRegistry;
use crate::error::LintError;
use crate::process::SectionReport;
use crate::results::{LintResult, Severity};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

pub fn format_results_text(reports: &[SectionReport], color: bool) -> String {
    let mut lines = Vec::new();
    let mut total = 0;
    let mut files = 0;

    for report in reports {
        files += report.files.len();
        for result in &report.results {
            total += 1;
            lines.push(format_result_line(result, color));
        }
    }

    lines.push(format!(
        "{} result(s) in {} file(s), {} section(s).",
        total,
        files,
        reports.len()
    ));
    lines.join("\n")
}

fn format_result_line(result: &LintResult, color: bool) -> String {
    let location = match result.line {
        Some(line) => format!("{}:{}", result.file.display(), line),
        None => result.file.display().to_string(),
    };
    let severity = format!("[{}]", result.severity);
    let severity = if !color {
        severity
    } else {
        match result.severity {
            Severity::Major => severity.red().to_string(),
            Severity::Normal => severity.yellow().to_string(),
            Severity::Info => severity.dimmed().to_string(),
        }
    };
    format!("{} {} {}: {}", location, severity, result.origin, result.message)
}

/// `{"results": {"<section>": [...]}}`, pretty printed.
pub fn format_results_json(reports: &[SectionReport]) -> Result<String, LintError> {
    let mut sections = Map::new();
    for report in reports {
        sections.insert(report.name.clone(), serde_json::to_value(&report.results)?);
    }
    let mut root = Map::new();
    root.insert("results".to_string(), Value::Object(sections));
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

pub fn format_bear_table(registry: &BearRegistry) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Bear", "Description", "Requirements"]);
    for bear in registry.list_all() {
        let requirements: Vec<String> = bear
            .requirements()
            .iter()
            .map(|r| {
                let state = if r.is_installed() { "ok" } else { "missing" };
                format!("{} ({})", r.name(), state)
            })
            .collect();
        let requirements = if requirements.is_empty() {
            "-".to_string()
        } else {
            requirements.join(", ")
        };
        table.add_row(vec![
            bear.name().to_string(),
            bear.description().to_string(),
            requirements,
        ]);
    }
    table.to_string()
}
