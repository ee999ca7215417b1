//! Process execution utilities
//!
//! Hands a full command line to the host shell and reports how it exited.

use crate::error::{MoverError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Utility for running command lines through the host shell
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

/// Result of a process execution
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Whether the process was successful
    pub success: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command line through `cmd /C` on Windows or `sh -c` elsewhere,
    /// inheriting stdout/stderr.
    ///
    /// A non-zero exit is returned as [`MoverError::Process`].
    #[instrument(skip(self))]
    pub fn run_shell(&self, command_line: &str) -> Result<ProcessResult> {
        if self.debug {
            debug!("Running through host shell: {}", command_line);
        }

        let mut cmd = Self::shell_command(command_line);
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        let status = cmd
            .status()
            .map_err(|e| MoverError::spawn(command_line, e))?;

        let success = status.success();
        let exit_code = status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}",
            success, exit_code
        );

        if !success {
            return Err(MoverError::process(
                command_line,
                exit_code,
                format!("Command failed with exit code: {exit_code:?}"),
            ));
        }

        Ok(ProcessResult { exit_code, success })
    }

    #[cfg(windows)]
    fn shell_command(command_line: &str) -> Command {
        use std::os::windows::process::CommandExt;

        // cmd.exe does its own parsing, so the quotes must reach it untouched
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").raw_arg(command_line);
        cmd
    }

    #[cfg(not(windows))]
    fn shell_command(command_line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command_line);
        cmd
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_shell_success() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_shell("true").unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_shell_failure_reports_exit_code() {
        let runner = ProcessRunner::new(true);
        let result = runner.run_shell("exit 3");

        if let Err(MoverError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "exit 3");
            assert_eq!(exit_code, Some(3));
        } else {
            panic!("Expected Process error");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_shell_keeps_quoting() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_shell("test \"a b\" = \"a b\"");
        assert!(result.is_ok());
    }
}
