//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::process::Output;

/// Captured result of one external process run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// External command runner abstraction.
///
/// Calls block until the process exits. There is no timeout.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandOutput>;

    /// Run a full command line through the platform shell.
    fn run_line(&self, line: &str) -> io::Result<CommandOutput>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner implementation.
#[derive(Debug, Clone)]
pub struct RealCommandRunner {
    shell: String,
}

impl RealCommandRunner {
    /// Runner that hands command lines to `shell`.
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn shell_flag(&self) -> &'static str {
        if self.shell.eq_ignore_ascii_case("cmd") || self.shell.eq_ignore_ascii_case("cmd.exe") {
            "/C"
        } else {
            "-c"
        }
    }
}

impl Default for RealCommandRunner {
    fn default() -> Self {
        Self::new(default_shell())
    }
}

/// Platform shell used when none is configured.
pub fn default_shell() -> &'static str {
    if cfg!(windows) {
        "cmd"
    } else {
        "sh"
    }
}

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandOutput> {
        std::process::Command::new(cmd)
            .args(args)
            .output()
            .map(CommandOutput::from)
    }

    fn run_line(&self, line: &str) -> io::Result<CommandOutput> {
        std::process::Command::new(&self.shell)
            .arg(self.shell_flag())
            .arg(line)
            .output()
            .map(CommandOutput::from)
    }
}
