//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: go.mod files that cannot be read
//! - ToolError: failures of the external module tool
//! - ConfigError: invalid run configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// External tool related errors
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file access
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to open or read the manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reported while running the external module tool
#[derive(Error, Debug)]
pub enum ToolError {
    /// The command could not be started at all
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully
    #[error("command '{command}' failed with {}", exit_description(.code))]
    NonZeroExit { command: String, code: Option<i32> },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Target version given but empty
    #[error("target version must not be empty")]
    EmptyVersion,
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl ToolError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        ToolError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new NonZeroExit error
    pub fn non_zero_exit(command: impl Into<String>, code: Option<i32>) -> Self {
        ToolError::NonZeroExit {
            command: command.into(),
            code,
        }
    }
}

impl AppError {
    /// Process exit code for this error
    ///
    /// A failing tool propagates its own exit code when it fits in `1..=255`.
    /// Everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Tool(ToolError::NonZeroExit {
                code: Some(code), ..
            }) => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
