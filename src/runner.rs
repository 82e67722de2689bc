//! External command execution
//!
//! This module provides:
//! - An argument-vector command type (never interpreted by a shell)
//! - The executor seam used to swap real processes for recording fakes
//! - `run`, which echoes a command, executes it and fails on non-zero exit

use crate::error::ToolError;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// A program plus its argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Program and arguments as one vector
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Quote an argument for display when it would not survive a shell as-is
fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./@=:+,%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line: Vec<String> = self.argv().into_iter().map(quote_arg).collect();
        write!(f, "{}", line.join(" "))
    }
}

/// Result of executing a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output (empty unless captured)
    pub stdout: String,
    /// Captured standard error (empty unless captured)
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a command that exited with `code` and captured nothing
    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for executing external commands
pub trait CommandExecutor {
    /// Execute `command` in `working_dir`
    ///
    /// When `capture_output` is false the child inherits the standard streams.
    fn execute(
        &self,
        command: &ToolCommand,
        working_dir: &Path,
        capture_output: bool,
    ) -> std::io::Result<CommandOutput>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn execute(
        &self,
        command: &ToolCommand,
        working_dir: &Path,
        capture_output: bool,
    ) -> std::io::Result<CommandOutput> {
        (**self).execute(command, working_dir, capture_output)
    }
}

/// Executor that spawns real processes
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(
        &self,
        command: &ToolCommand,
        working_dir: &Path,
        capture_output: bool,
    ) -> std::io::Result<CommandOutput> {
        let mut process = Command::new(command.program());
        process.args(command.get_args()).current_dir(working_dir);

        if capture_output {
            let output = process.output()?;
            Ok(CommandOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        } else {
            let status = process
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?;
            Ok(CommandOutput {
                code: status.code(),
                ..CommandOutput::default()
            })
        }
    }
}

/// Options for a single `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Capture stdout/stderr instead of inheriting them
    pub capture_output: bool,
    /// Turn a non-zero exit into an error
    pub check: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            capture_output: false,
            check: true,
        }
    }
}

/// Echo and execute a command
///
/// The command line is printed before execution so a failing run shows what it
/// was about to do.
pub fn run<E: CommandExecutor + ?Sized>(
    executor: &E,
    command: &ToolCommand,
    working_dir: &Path,
    options: RunOptions,
) -> Result<CommandOutput, ToolError> {
    println!("{}", command);
    log::debug!("Running in {}: {:?}", working_dir.display(), command.argv());

    let output = executor
        .execute(command, working_dir, options.capture_output)
        .map_err(|e| ToolError::spawn(command.to_string(), e))?;

    if options.check && !output.success() {
        return Err(ToolError::non_zero_exit(command.to_string(), output.code));
    }

    Ok(output)
}
