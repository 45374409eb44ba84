//! Console post-mortem inspector used by the `bearlint` binary.

use super::{Failure, InspectionFacility};
use dialoguer::Select;
use owo_colors::OwoColorize;
use std::backtrace::BacktraceStatus;
use std::io::IsTerminal;

const MENU: &[&str] = &["Show cause chain", "Show backtrace", "Show invocation", "Continue"];

/// Prints a post-mortem report to stderr and, on a terminal, offers a small
/// menu to dig into the failure. Leaving the menu lets the failure propagate.
pub struct ConsoleInspector {
    invocation: Vec<String>,
    interactive: bool,
    color: bool,
}

impl ConsoleInspector {
    /// `invocation` is the argument vector shown by "Show invocation".
    pub fn new(invocation: Vec<String>) -> Self {
        let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
        Self {
            invocation,
            interactive,
            color: interactive,
        }
    }

    /// Never prompt, even on a terminal.
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }

    /// Render the report printed before the menu.
    pub fn report(&self, failure: &Failure<'_>) -> String {
        let title = format!("bearlint --debug: unhandled {}", failure.kind());
        let mut out = if self.color {
            format!("{}\n", title.red().bold())
        } else {
            format!("{}\n", title)
        };
        out.push_str(&format!("  {}\n", failure.message()));
        let causes = cause_chain(failure);
        if causes.len() > 1 {
            out.push_str(&format!("  ({} causes, see cause chain)\n", causes.len() - 1));
        }
        out.push_str("The failure is re-raised when this session ends.");
        out
    }

    fn session(&self, failure: &Failure<'_>) {
        loop {
            let choice = Select::new()
                .with_prompt("post-mortem")
                .items(MENU)
                .default(MENU.len() - 1)
                .interact_opt();

            match choice {
                Ok(Some(0)) => eprintln!("{}", cause_chain(failure).join("\n")),
                Ok(Some(1)) => eprintln!("{}", backtrace(failure)),
                Ok(Some(2)) => eprintln!("{}", self.invocation.join(" ")),
                Ok(_) => break,
                Err(e) => {
                    tracing::debug!(error = %e, "Post-mortem prompt closed");
                    break;
                }
            }
        }
    }
}

impl InspectionFacility for ConsoleInspector {
    fn inspect(&self, failure: &Failure<'_>) {
        eprintln!("{}", self.report(failure));
        if self.interactive {
            self.session(failure);
        }
    }
}

fn cause_chain(failure: &Failure<'_>) -> Vec<String> {
    match failure {
        Failure::Error(error) => error
            .chain()
            .enumerate()
            .map(|(depth, cause)| format!("{:>3}: {}", depth, cause))
            .collect(),
        Failure::Panic(message) => vec![format!("  0: {}", message)],
    }
}

fn backtrace(failure: &Failure<'_>) -> String {
    match failure {
        Failure::Error(error) => {
            let trace = error.backtrace();
            if trace.status() == BacktraceStatus::Captured {
                trace.to_string()
            } else {
                "No backtrace captured; rerun with RUST_BACKTRACE=1.".to_string()
            }
        }
        Failure::Panic(_) => {
            "Panic backtraces are printed by the panic hook; rerun with RUST_BACKTRACE=1."
                .to_string()
        }
    }
}
