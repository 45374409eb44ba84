//! Configuration sources, one module per origin.

pub mod environment;
pub mod global_file;
pub mod project_file;
