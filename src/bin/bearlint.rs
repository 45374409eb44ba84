//! bearlint CLI Binary

use bearlint::bear::BearRegistry;
use bearlint::cli::{Cli, EXIT_FAILURE};
use bearlint::config::ConfigLoader;
use bearlint::debug::ConsoleInspector;
use bearlint::logging::{init_logging, LoggingConfig};
use bearlint::modes::Modes;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_FAILURE);
    }

    info!(debug = cli.debug, "bearlint starting");

    let registry = BearRegistry::with_builtin();
    let modes = Modes::default();
    let inspector = ConsoleInspector::new(std::env::args().collect());

    match bearlint::cli::execute(&cli, &registry, &modes, &inspector) {
        Ok(outcome) => {
            info!(has_results = outcome.has_results, "Run completed");
            if let Some(rendered) = &outcome.rendered {
                println!("{}", rendered);
            }
            process::exit(outcome.exit_code());
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("{}", bearlint::cli::map_error(&e));
            process::exit(EXIT_FAILURE);
        }
    }
}

/// Build logging configuration from the config file and CLI flags.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load_for(&cli.root, cli.config.as_deref())
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.quiet {
        config.level = "off".to_string();
    }
    if cli.verbose || cli.debug {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
