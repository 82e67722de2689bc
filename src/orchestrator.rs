//! Update orchestrator for coordinating the whole run
//!
//! This module provides:
//! - Pipeline selection: replace directive vs. family upgrade
//! - Workflow coordination per module: scan → mutate → tidy
//! - Short-circuit of modules with nothing to do
//! - Fail-fast error handling; the first error ends the run

use crate::config::UpdateConfig;
use crate::domain::{Module, ModuleOutcome, Pipeline, RunSummary, TargetVersion};
use crate::error::AppError;
use crate::manifest::ManifestScanner;
use crate::output;
use crate::runner::CommandExecutor;
use crate::update::UpdateDriver;
use std::path::PathBuf;

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator<E> {
    /// Static run configuration
    config: UpdateConfig,
    /// Read-only manifest queries
    scanner: ManifestScanner,
    /// Module tool invocations
    driver: UpdateDriver<E>,
}

impl<E: CommandExecutor> Orchestrator<E> {
    /// Create an orchestrator resolving module paths relative to `root`
    pub fn new(config: UpdateConfig, executor: E, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let driver = UpdateDriver::new(executor, &config, root.clone());
        Self {
            config,
            scanner: ManifestScanner::new(root),
            driver,
        }
    }

    /// Run the selected pipeline over every module in registry order
    pub fn run(
        &self,
        pipeline: Pipeline,
        version: &TargetVersion,
    ) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::new(pipeline, version.clone());

        for module in &self.config.registry {
            let outcome = match pipeline {
                Pipeline::ReplaceFork => self.update_fork(module, version)?,
                Pipeline::FamilyUpgrade => self.update_family(module, version)?,
            };
            summary.add_outcome(outcome);
        }

        Ok(summary)
    }

    /// Rewrite the fork replace directive of one module
    fn update_fork(
        &self,
        module: &Module,
        version: &TargetVersion,
    ) -> Result<ModuleOutcome, AppError> {
        let directive = self
            .scanner
            .find_replace_directive(module, &self.config.replace_pattern)?;

        let Some(directive) = directive else {
            log::debug!(
                "{}: no {} replace directive, skipping",
                module,
                self.config.fork_dependency
            );
            return Ok(ModuleOutcome::Skipped {
                module: module.clone(),
            });
        };

        log::info!(
            "{}: current replace {} {} => {} {}",
            module,
            self.config.base_dependency,
            directive.base_version.as_deref().unwrap_or("(any)"),
            self.config.fork_dependency,
            directive.fork_version.as_deref().unwrap_or("(none)"),
        );

        println!("{}", output::module_header(module));
        self.driver.apply_replacement_update(module, version)?;
        self.driver.tidy(module)?;

        Ok(ModuleOutcome::Updated {
            module: module.clone(),
            dependencies: Vec::new(),
            invocations: 2,
        })
    }

    /// Pin the direct family dependencies of one module
    fn update_family(
        &self,
        module: &Module,
        version: &TargetVersion,
    ) -> Result<ModuleOutcome, AppError> {
        let needs = self
            .scanner
            .find_dependency_update_targets(module, &self.config.family)?;

        if needs.is_empty() {
            log::debug!(
                "{}: no direct {} dependencies, skipping",
                module,
                self.config.family
            );
            return Ok(ModuleOutcome::Skipped {
                module: module.clone(),
            });
        }

        println!("{}", output::module_header(module));
        for dependency in &needs {
            self.driver
                .apply_dependency_upgrade(module, dependency, version)?;
        }
        self.driver.tidy(module)?;

        Ok(ModuleOutcome::Updated {
            module: module.clone(),
            invocations: needs.len() + 1,
            dependencies: needs.into_iter().collect(),
        })
    }
}
