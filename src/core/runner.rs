//! Action execution
//!
//! Runs the planned moves one at a time: echo, execute, pause. A failed move
//! is logged and the run carries on with the next one.

use crate::{
    core::action::MoveAction,
    error::{MoverError, Result},
    utils::{fs::FileSystemUtils, process::ProcessRunner},
};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Something that can carry out a single move
pub trait Executor {
    /// Perform the move described by `action`
    fn execute(&self, action: &MoveAction) -> Result<()>;
}

/// Runs the action's command line through the host shell
#[derive(Debug, Default)]
pub struct ShellExecutor {
    process_runner: ProcessRunner,
}

impl ShellExecutor {
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self {
            process_runner: ProcessRunner::new(debug),
        }
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, action: &MoveAction) -> Result<()> {
        self.process_runner
            .run_shell(&action.command_line())
            .map(|_| ())
    }
}

/// Renames the source into the root without going through a shell
#[derive(Debug, Default)]
pub struct NativeExecutor {
    fs_utils: FileSystemUtils,
}

impl NativeExecutor {
    pub fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
        }
    }
}

impl Executor for NativeExecutor {
    fn execute(&self, action: &MoveAction) -> Result<()> {
        let source = action.source_path();
        let moved_to = self
            .fs_utils
            .move_into(&source, action.destination())
            .map_err(|e| MoverError::file_system("move", source, e))?;

        debug!("Now at {}", moved_to.display());
        Ok(())
    }
}

/// What happened to one action
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    /// Command text that was echoed
    pub command: String,
    /// When execution of the action began
    pub started_at: DateTime<Utc>,
    /// Whether the executor reported success
    pub succeeded: bool,
}

/// Outcomes of a whole run, in execution order
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<ActionOutcome>,
}

impl RunReport {
    /// Number of actions whose executor reported a failure
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded).count()
    }
}

/// Sequential runner that pauses after every action
pub struct ActionRunner<E: Executor> {
    executor: E,
    delay: Duration,
}

impl<E: Executor> ActionRunner<E> {
    /// Create a new runner
    #[must_use]
    pub const fn new(executor: E, delay: Duration) -> Self {
        Self { executor, delay }
    }

    /// Run every action in order, echoing each to `out` before it executes.
    ///
    /// Only a failure to write to `out` ends the run early.
    #[instrument(skip(self, actions, out))]
    pub fn run<W: Write>(&self, actions: &[MoveAction], out: &mut W) -> std::io::Result<RunReport> {
        let mut report = RunReport::default();

        for (i, action) in actions.iter().enumerate() {
            let command = action.command_line();
            writeln!(out, "{command}")?;
            out.flush()?;

            let started_at = Utc::now();
            debug!("Running action {} of {}", i + 1, actions.len());

            let succeeded = match self.executor.execute(action) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Action {} failed: {}", i + 1, e);
                    false
                }
            };

            report.outcomes.push(ActionOutcome {
                command,
                started_at,
                succeeded,
            });

            std::thread::sleep(self.delay);
        }

        info!(
            "Attempted {} moves, {} failed",
            report.outcomes.len(),
            report.failures()
        );
        Ok(report)
    }
}
