//! CLI route: run context and the supervised entry point.

use crate::bear::BearRegistry;
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, LintConfig, Section};
use crate::debug::{DebugSupervisor, InspectionFacility};
use crate::error::LintError;
use crate::modes::{Modes, Outcome};
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything one invocation needs: the arguments, the loaded configuration,
/// the sections to run, and the bear registry. Created per invocation.
pub struct RunContext<'r> {
    pub root: PathBuf,
    pub config: LintConfig,
    pub sections: Vec<Section>,
    pub registry: &'r BearRegistry,
    /// JSON output file, when given
    pub output: Option<PathBuf>,
    pub color: bool,
}

impl<'r> RunContext<'r> {
    /// Build the context from parsed arguments. Uses ConfigLoader only.
    pub fn new(cli: &Cli, registry: &'r BearRegistry) -> Result<Self, LintError> {
        let config = ConfigLoader::load_for(&cli.root, cli.config.as_deref())?;
        let sections = config.resolve_sections(&cli.targeting());
        if sections.is_empty() && !cli.show_bears {
            tracing::warn!("No sections configured and no files or bears given");
        }
        debug!(sections = sections.len(), "Run context initialized");

        Ok(Self {
            root: cli.root.clone(),
            config,
            sections,
            registry,
            output: cli.output.clone(),
            color: !cli.no_color,
        })
    }
}

/// The callable the debug supervisor wraps: build the context, pick the mode,
/// run it.
pub fn run(cli: &Cli, registry: &BearRegistry, modes: &Modes) -> anyhow::Result<Outcome> {
    let context = RunContext::new(cli, registry)?;
    let mode = modes.select(cli.mode_kind());
    info!(mode = mode.name(), "Running mode");
    mode.run(&context)
}

/// Run the invocation under the debug supervisor. With `--debug`, a failure
/// is shown to `facility` once before it is returned unchanged.
pub fn execute(
    cli: &Cli,
    registry: &BearRegistry,
    modes: &Modes,
    facility: &dyn InspectionFacility,
) -> anyhow::Result<Outcome> {
    let mut supervisor = DebugSupervisor::new(cli.debug, facility);
    supervisor.run(|| run(cli, registry, modes))
}
