//! Manifest mutation and normalization
//!
//! This module provides:
//! - Replace directive updates (base => fork at one version)
//! - Family dependency upgrades (one `go get` per identifier)
//! - `tidy`, run after a module's mutations succeed
//!
//! Every step either succeeds or aborts the run; nothing is retried or rolled back.

use crate::config::UpdateConfig;
use crate::domain::{Module, TargetVersion};
use crate::error::ToolError;
use crate::runner::{run, CommandExecutor, RunOptions, ToolCommand};
use crate::toolchain::GoTool;
use std::path::PathBuf;

/// Issues module tool invocations for modules below a root directory
pub struct UpdateDriver<E> {
    executor: E,
    tool: GoTool,
    root: PathBuf,
    base_dependency: String,
    fork_dependency: String,
}

impl<E: CommandExecutor> UpdateDriver<E> {
    /// Create a driver from the run configuration
    pub fn new(executor: E, config: &UpdateConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            tool: GoTool::new(config.tool_program.as_str()),
            root: root.into(),
            base_dependency: config.base_dependency.clone(),
            fork_dependency: config.fork_dependency.clone(),
        }
    }

    fn run_in(&self, module: &Module, command: &ToolCommand) -> Result<(), ToolError> {
        run(
            &self.executor,
            command,
            &module.dir(&self.root),
            RunOptions::default(),
        )?;
        Ok(())
    }

    /// Point the base dependency at the fork, both pinned at `version`
    pub fn apply_replacement_update(
        &self,
        module: &Module,
        version: &TargetVersion,
    ) -> Result<(), ToolError> {
        let command =
            self.tool
                .edit_replace(&self.base_dependency, &self.fork_dependency, version);
        self.run_in(module, &command)
    }

    /// Fetch and pin `dependency` at `version` in `module`
    pub fn apply_dependency_upgrade(
        &self,
        module: &Module,
        dependency: &str,
        version: &TargetVersion,
    ) -> Result<(), ToolError> {
        self.run_in(module, &self.tool.get(dependency, version))
    }

    /// Reconcile `module`'s go.mod after mutation
    pub fn tidy(&self, module: &Module) -> Result<(), ToolError> {
        self.run_in(module, &self.tool.tidy())
    }
}
