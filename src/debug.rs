//! Debug Supervisor
//!
//! With `--debug`, the whole invocation runs inside an interception scope.
//! Whatever escapes the run, a returned error or a panic, is handed to an
//! [`InspectionFacility`] exactly once and then re-raised unchanged: the same
//! `anyhow::Error` value is returned, or the same panic payload resumes
//! unwinding. The facility is diagnostic only. It returns nothing, and a
//! facility that panics is contained so the original failure still wins.
//!
//! Without `--debug` the run is called directly and no scope exists.

use crate::error::LintError;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

mod console;

pub use console::ConsoleInspector;

/// What escaped a supervised run.
#[derive(Debug, Clone, Copy)]
pub enum Failure<'a> {
    /// The run returned an error
    Error(&'a anyhow::Error),
    /// The run panicked; the payload's message
    Panic(&'a str),
}

impl Failure<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Error(_) => "error",
            Failure::Panic(_) => "panic",
        }
    }

    /// Top-level message, without causes.
    pub fn message(&self) -> String {
        match self {
            Failure::Error(error) => error.to_string(),
            Failure::Panic(message) => message.to_string(),
        }
    }
}

/// Post-mortem inspection entered when a debug run fails.
pub trait InspectionFacility {
    fn inspect(&self, failure: &Failure<'_>);
}

/// Facility that only records what it was shown.
///
/// Stands in for an interactive debugger whose session always ends by
/// letting the failure propagate.
#[derive(Debug, Default)]
pub struct PassThrough {
    seen: RefCell<Vec<String>>,
}

impl PassThrough {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of inspections so far.
    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }

    /// Messages of the inspected failures, in order.
    pub fn messages(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl InspectionFacility for PassThrough {
    fn inspect(&self, failure: &Failure<'_>) {
        self.seen.borrow_mut().push(failure.message());
    }
}

/// Where a supervised run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    Idle,
    Running,
    Completed,
    /// Failed and the facility has returned from inspecting it
    FailedAndReported,
    /// Failed outside debug mode; nothing was reported
    Failed,
}

/// Wraps one CLI invocation. Single use.
pub struct DebugSupervisor<'f> {
    debug: bool,
    facility: &'f dyn InspectionFacility,
    state: Cell<SupervisorState>,
}

impl<'f> DebugSupervisor<'f> {
    pub fn new(debug: bool, facility: &'f dyn InspectionFacility) -> Self {
        Self {
            debug,
            facility,
            state: Cell::new(SupervisorState::Idle),
        }
    }

    pub fn state(&self) -> SupervisorState {
        self.state.get()
    }

    /// Run `f` under supervision.
    ///
    /// Panics raised by `f` in debug mode resume unwinding after inspection.
    pub fn run<T, F>(&mut self, f: F) -> anyhow::Result<T>
    where
        F: FnOnce() -> anyhow::Result<T>,
    {
        if self.state.get() != SupervisorState::Idle {
            return Err(LintError::SupervisorReused.into());
        }

        if !self.debug {
            let guard = UnsupervisedRun::start(&self.state);
            let result = f();
            if result.is_ok() {
                guard.complete();
            }
            return result;
        }

        let scope = InterceptionScope::enter(&self.state);
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(value)) => {
                scope.complete();
                Ok(value)
            }
            Ok(Err(error)) => {
                scope.report(self.facility, &Failure::Error(&error));
                Err(error)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                scope.report(self.facility, &Failure::Panic(&message));
                panic::resume_unwind(payload)
            }
        }
    }
}

/// Tracks a run outside debug mode. Anything but an explicit `complete`,
/// including a panic unwinding through `f`, ends in `Failed`.
struct UnsupervisedRun<'s> {
    state: &'s Cell<SupervisorState>,
}

impl<'s> UnsupervisedRun<'s> {
    fn start(state: &'s Cell<SupervisorState>) -> Self {
        state.set(SupervisorState::Running);
        Self { state }
    }

    fn complete(self) {
        self.state.set(SupervisorState::Completed);
    }
}

impl Drop for UnsupervisedRun<'_> {
    fn drop(&mut self) {
        if self.state.get() == SupervisorState::Running {
            self.state.set(SupervisorState::Failed);
        }
    }
}

/// Guard for "inside a debug-wrapped execution". Entering moves the state to
/// `Running`; dropping releases the scope on every exit path.
struct InterceptionScope<'s> {
    state: &'s Cell<SupervisorState>,
}

impl<'s> InterceptionScope<'s> {
    fn enter(state: &'s Cell<SupervisorState>) -> Self {
        state.set(SupervisorState::Running);
        debug!("Entered debug interception scope");
        Self { state }
    }

    fn complete(self) {
        self.state.set(SupervisorState::Completed);
    }

    fn report(self, facility: &dyn InspectionFacility, failure: &Failure<'_>) {
        debug!(kind = failure.kind(), "Handing failure to inspection facility");
        let inspected = panic::catch_unwind(AssertUnwindSafe(|| facility.inspect(failure)));
        if let Err(payload) = inspected {
            warn!(
                error = %panic_message(payload.as_ref()),
                "Inspection facility panicked; re-raising the original failure"
            );
        }
        self.state.set(SupervisorState::FailedAndReported);
    }
}

impl Drop for InterceptionScope<'_> {
    fn drop(&mut self) {
        debug!(state = ?self.state.get(), "Released debug interception scope");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
