//! Static run configuration
//!
//! Built once at startup and passed explicitly to the scanner, the update
//! driver and the orchestrator.

use crate::domain::ModuleRegistry;
use regex::Regex;

/// Upstream client library replaced by the fork
pub const BASE_DEPENDENCY: &str = "github.com/ethereum/go-ethereum";

/// Fork that replaces the base dependency
pub const FORK_DEPENDENCY: &str = "github.com/ethereum-optimism/op-geth";

/// Shared path prefix of the optimism module family
pub const DEPENDENCY_FAMILY: &str = "github.com/ethereum-optimism/optimism";

/// Program implementing the module tool contract
pub const DEFAULT_TOOL_PROGRAM: &str = "go";

/// Immutable configuration for one run
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// Modules to process, in order
    pub registry: ModuleRegistry,
    /// Matches a base => fork replace directive line
    pub replace_pattern: Regex,
    /// Literal path prefix identifying the dependency family
    pub family: String,
    /// Module path of the replaced dependency
    pub base_dependency: String,
    /// Module path of the fork
    pub fork_dependency: String,
    /// Module tool executable
    pub tool_program: String,
}

impl UpdateConfig {
    /// Replace the module registry
    pub fn with_registry(mut self, registry: ModuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the module tool executable
    pub fn with_tool_program(mut self, program: impl Into<String>) -> Self {
        self.tool_program = program.into();
        self
    }
}

/// Build the replace directive pattern for a base/fork pair
///
/// The text between the base path and `=>` is captured as the base version.
/// A directive without a base version still matches.
pub fn replace_pattern(base: &str, fork: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"replace {}(?: (.*))? => {}",
        regex::escape(base),
        regex::escape(fork)
    ))
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            registry: ModuleRegistry::default(),
            // Both inputs are constants, escaped above.
            replace_pattern: replace_pattern(BASE_DEPENDENCY, FORK_DEPENDENCY)
                .expect("replace pattern built from escaped constants"),
            family: DEPENDENCY_FAMILY.to_string(),
            base_dependency: BASE_DEPENDENCY.to_string(),
            fork_dependency: FORK_DEPENDENCY.to_string(),
            tool_program: DEFAULT_TOOL_PROGRAM.to_string(),
        }
    }
}
