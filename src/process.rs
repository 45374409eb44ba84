//! Section execution: check bears, collect files, run bears over files.

use crate::bear::{check_prerequisites, BearRegistry};
use crate::config::Section;
use crate::files::collect_files;
use crate::results::{LintResult, SourceFile};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Everything one section produced.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub files: Vec<PathBuf>,
    pub results: Vec<LintResult>,
}

/// Run one section.
///
/// Every bear's prerequisites are checked before any file is read. A failing
/// bear aborts the section with the bear's own error, unwrapped.
pub fn execute_section(
    section: &Section,
    registry: &BearRegistry,
    root: &Path,
) -> anyhow::Result<SectionReport> {
    let _span = info_span!("section", name = %section.name).entered();

    let bears = registry.instantiate(&section.config.bears)?;
    for bear in &bears {
        check_prerequisites(bear.as_ref())?;
    }

    let files = collect_files(&section.config.files, &section.config.ignore, root)?;
    info!(bears = bears.len(), files = files.len(), "Running section");

    let mut results = Vec::new();
    for path in &files {
        let source = SourceFile::read(path)?;
        for bear in &bears {
            let found = bear.run(&source, &section.config.settings)?;
            debug!(
                bear = bear.name(),
                file = %path.display(),
                results = found.len(),
                "Bear finished"
            );
            results.extend(found);
        }
    }

    Ok(SectionReport {
        name: section.name.clone(),
        files,
        results,
    })
}

/// Run sections in order, stopping at the first failure.
pub fn execute_sections(
    sections: &[Section],
    registry: &BearRegistry,
    root: &Path,
) -> anyhow::Result<Vec<SectionReport>> {
    sections
        .iter()
        .map(|section| execute_section(section, registry, root))
        .collect()
}
