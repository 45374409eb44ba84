//! Output modes: each mode drives the analysis and renders its outcome.

use crate::cli::{
    format_bear_table, format_results_json, format_results_text, RunContext, EXIT_OK,
    EXIT_RESULTS,
};
use crate::error::LintError;
use crate::process::execute_sections;
use tracing::info;

/// What a mode hands back to the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout; `None` when the mode wrote its output elsewhere
    pub rendered: Option<String>,
    pub has_results: bool,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        if self.has_results {
            EXIT_RESULTS
        } else {
            EXIT_OK
        }
    }
}

pub trait Mode {
    fn name(&self) -> &str;

    fn run(&self, ctx: &RunContext<'_>) -> anyhow::Result<Outcome>;
}

/// Which mode an invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Normal,
    Json,
    ShowBears,
}

/// Plain text, one line per result.
#[derive(Debug, Default)]
pub struct NormalMode;

impl Mode for NormalMode {
    fn name(&self) -> &str {
        "normal"
    }

    fn run(&self, ctx: &RunContext<'_>) -> anyhow::Result<Outcome> {
        let reports = execute_sections(&ctx.sections, ctx.registry, &ctx.root)?;
        let has_results = reports.iter().any(|r| !r.results.is_empty());
        Ok(Outcome {
            rendered: Some(format_results_text(&reports, ctx.color)),
            has_results,
        })
    }
}

/// `{"results": {"<section>": [...]}}` on stdout or into `--output`.
#[derive(Debug, Default)]
pub struct JsonMode;

impl Mode for JsonMode {
    fn name(&self) -> &str {
        "json"
    }

    fn run(&self, ctx: &RunContext<'_>) -> anyhow::Result<Outcome> {
        let reports = execute_sections(&ctx.sections, ctx.registry, &ctx.root)?;
        let has_results = reports.iter().any(|r| !r.results.is_empty());
        let json = format_results_json(&reports)?;

        let rendered = match &ctx.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", json)).map_err(|source| LintError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!(output = %path.display(), "Wrote JSON results");
                None
            }
            None => Some(json),
        };

        Ok(Outcome {
            rendered,
            has_results,
        })
    }
}

/// Table of registered bears and their requirements.
#[derive(Debug, Default)]
pub struct ShowBearsMode;

impl Mode for ShowBearsMode {
    fn name(&self) -> &str {
        "show-bears"
    }

    fn run(&self, ctx: &RunContext<'_>) -> anyhow::Result<Outcome> {
        Ok(Outcome {
            rendered: Some(format_bear_table(ctx.registry)),
            has_results: false,
        })
    }
}

/// The modes the entry point dispatches to. Each can be swapped.
pub struct Modes {
    pub normal: Box<dyn Mode>,
    pub json: Box<dyn Mode>,
    pub show_bears: Box<dyn Mode>,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            normal: Box::new(NormalMode),
            json: Box::new(JsonMode),
            show_bears: Box::new(ShowBearsMode),
        }
    }
}

impl Modes {
    pub fn with_json(mut self, mode: impl Mode + 'static) -> Self {
        self.json = Box::new(mode);
        self
    }

    pub fn select(&self, kind: ModeKind) -> &dyn Mode {
        match kind {
            ModeKind::Normal => self.normal.as_ref(),
            ModeKind::Json => self.json.as_ref(),
            ModeKind::ShowBears => self.show_bears.as_ref(),
        }
    }
}
