//! Run summary types
//!
//! Tracks what happened to each module of the registry during one run.

use super::{Module, Pipeline, TargetVersion};

/// Outcome for a single module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome {
    /// The module was mutated and tidied
    Updated {
        module: Module,
        /// Dependency identifiers pinned (empty for the replace pipeline)
        dependencies: Vec<String>,
        /// Number of module tool invocations, tidy included
        invocations: usize,
    },
    /// The scan found nothing to do
    Skipped { module: Module },
}

impl ModuleOutcome {
    pub fn module(&self) -> &Module {
        match self {
            ModuleOutcome::Updated { module, .. } | ModuleOutcome::Skipped { module } => module,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, ModuleOutcome::Updated { .. })
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Pipeline that ran
    pub pipeline: Pipeline,
    /// Version applied to every update
    pub version: TargetVersion,
    /// Outcomes in registry order
    pub outcomes: Vec<ModuleOutcome>,
}

impl RunSummary {
    /// Creates a new, empty RunSummary
    pub fn new(pipeline: Pipeline, version: TargetVersion) -> Self {
        Self {
            pipeline,
            version,
            outcomes: Vec::new(),
        }
    }

    /// Adds a module outcome
    pub fn add_outcome(&mut self, outcome: ModuleOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the modules that were updated
    pub fn updated(&self) -> impl Iterator<Item = &Module> {
        self.outcomes
            .iter()
            .filter(|o| o.is_updated())
            .map(ModuleOutcome::module)
    }

    /// Returns the modules that were skipped
    pub fn skipped(&self) -> impl Iterator<Item = &Module> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_updated())
            .map(ModuleOutcome::module)
    }

    /// Returns the total number of module tool invocations
    pub fn total_invocations(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                ModuleOutcome::Updated { invocations, .. } => *invocations,
                ModuleOutcome::Skipped { .. } => 0,
            })
            .sum()
    }

    /// Returns true if any module was updated
    pub fn has_changes(&self) -> bool {
        self.outcomes.iter().any(ModuleOutcome::is_updated)
    }
}
