//! Requirements a bear declares before it can run.

use std::fmt;

/// Something a bear needs installed.
pub trait Requirement: fmt::Debug {
    /// Name shown when the requirement is missing.
    fn name(&self) -> String;

    fn is_installed(&self) -> bool;
}

/// An executable that must be found on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableRequirement {
    executable: String,
}

impl ExecutableRequirement {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Requirement for ExecutableRequirement {
    fn name(&self) -> String {
        self.executable.clone()
    }

    fn is_installed(&self) -> bool {
        which::which(&self.executable).is_ok()
    }
}
