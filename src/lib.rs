//! bearlint: pluggable static analysis
//!
//! Bears (analysis plugins) are selected by name, checked for their
//! requirements, and run over files chosen by glob patterns. Results are
//! rendered as text or JSON. With `--debug` the whole run is wrapped by the
//! debug supervisor, which hands any unhandled failure to a post-mortem
//! inspection facility once before re-raising it.

pub mod bear;
pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod files;
pub mod logging;
pub mod modes;
pub mod process;
pub mod results;
