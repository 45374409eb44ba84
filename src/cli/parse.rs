//! CLI parse: clap types for bearlint. No behavior beyond mode selection.

use crate::config::CliTargeting;
use crate::modes::ModeKind;
use clap::Parser;
use std::path::PathBuf;

/// bearlint - run analysis bears over your files
#[derive(Parser, Debug, Clone)]
#[command(name = "bearlint")]
#[command(about = "Run analysis bears over files and report what they find")]
pub struct Cli {
    /// Open a post-mortem session when the run fails unexpectedly, then re-raise
    #[arg(long)]
    pub debug: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file path (overrides bearlint.toml lookup)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Files to analyze, as glob patterns
    #[arg(short = 'f', long, num_args = 1.., value_delimiter = ',')]
    pub files: Vec<String>,

    /// Files to skip, as glob patterns
    #[arg(short = 'i', long, num_args = 1.., value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Bears to run, in order
    #[arg(short = 'b', long, num_args = 1.., value_delimiter = ',')]
    pub bears: Vec<String>,

    /// List registered bears and exit
    #[arg(short = 'B', long)]
    pub show_bears: bool,

    /// Write JSON results to this file instead of stdout
    #[arg(short = 'o', long, requires = "json")]
    pub output: Option<PathBuf>,

    /// Disable colored result output
    #[arg(long)]
    pub no_color: bool,

    /// Root that relative patterns and bearlint.toml are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout)
    #[arg(long)]
    pub log_output: Option<String>,
}

impl Cli {
    pub fn mode_kind(&self) -> ModeKind {
        if self.show_bears {
            ModeKind::ShowBears
        } else if self.json {
            ModeKind::Json
        } else {
            ModeKind::Normal
        }
    }

    pub fn targeting(&self) -> CliTargeting {
        CliTargeting {
            files: self.files.clone(),
            ignore: self.ignore.clone(),
            bears: self.bears.clone(),
        }
    }
}
