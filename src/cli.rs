//! CLI domain: parse, route, output, and presentation only.
//! Analysis lives in `process`; rendering drivers live in `modes`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, EXIT_FAILURE, EXIT_OK, EXIT_RESULTS};
pub use parse::Cli;
pub use presentation::{format_bear_table, format_results_json, format_results_text};
pub use route::{execute, run, RunContext};
