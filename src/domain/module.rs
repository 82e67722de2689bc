//! Module identifiers and the module registry

use std::fmt;
use std::path::{Path, PathBuf};

/// Manifest filename of every Go module
pub const MANIFEST_FILENAME: &str = "go.mod";

/// A Go module directory, relative to the run root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Module {
    path: String,
}

impl Module {
    /// Create a module from its relative directory path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Relative directory path as given in the registry
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Directory of this module below `root`
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }

    /// Path of this module's go.mod below `root`
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join(MANIFEST_FILENAME)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Ordered list of modules to process
///
/// Order fixes processing order only; modules carry no dependencies on each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    /// Create a registry from relative module paths
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: paths.into_iter().map(Module::new).collect(),
        }
    }

    /// Iterate modules in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new([
            "optimism",
            "simulators/optimism/l1ops",
            "simulators/optimism/p2p",
            "simulators/optimism/rpc",
            "simulators/optimism/daisy-chain",
        ])
    }
}

impl<'a> IntoIterator for &'a ModuleRegistry {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
