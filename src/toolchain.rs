//! Module tool command vectors
//!
//! The module tool (`go`) is driven through three operations:
//! - `go mod edit -replace <base>@<v>=<fork>@<v>`
//! - `go get <dependency>@<v>`
//! - `go mod tidy`

use crate::domain::TargetVersion;
use crate::runner::ToolCommand;

/// Builds module tool invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTool {
    program: String,
}

impl GoTool {
    /// Create a builder for the given executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new(self.program.as_str())
    }

    /// Set or overwrite the replace directive `base => fork`, both pinned at `version`
    pub fn edit_replace(&self, base: &str, fork: &str, version: &TargetVersion) -> ToolCommand {
        self.command().args(["mod", "edit", "-replace"]).arg(format!(
            "{base}@{version}={fork}@{version}",
            base = base,
            fork = fork,
            version = version
        ))
    }

    /// Fetch and pin `dependency` at `version`
    pub fn get(&self, dependency: &str, version: &TargetVersion) -> ToolCommand {
        self.command()
            .arg("get")
            .arg(format!("{}@{}", dependency, version))
    }

    /// Reconcile the manifest with the module's imports
    pub fn tidy(&self) -> ToolCommand {
        self.command().args(["mod", "tidy"])
    }
}

impl Default for GoTool {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOOL_PROGRAM)
    }
}
