//! Manifest reading and scanning
//!
//! This module provides:
//! - Reading a module's go.mod from disk
//! - Replace directive detection for the fork pipeline
//! - Family dependency collection for the upgrade pipeline

mod go_mod;

pub use go_mod::{
    scan_dependency_targets, scan_needs_replacement, scan_replace_directive, ManifestLine,
    ReplaceDirective,
};

use crate::domain::Module;
use crate::error::ManifestError;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Read a manifest file into memory
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Read-only queries over the manifests of modules below a root directory
#[derive(Debug, Clone)]
pub struct ManifestScanner {
    root: PathBuf,
}

impl ManifestScanner {
    /// Create a scanner resolving modules relative to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, module: &Module) -> Result<String, ManifestError> {
        read_manifest(&module.manifest_path(&self.root))
    }

    /// Return the first replace directive in `module` matching `pattern`
    pub fn find_replace_directive(
        &self,
        module: &Module,
        pattern: &Regex,
    ) -> Result<Option<ReplaceDirective>, ManifestError> {
        let content = self.read(module)?;
        Ok(scan_replace_directive(&content, pattern))
    }

    /// Check whether `module` carries a replace directive matching `pattern`
    pub fn needs_replacement_update(
        &self,
        module: &Module,
        pattern: &Regex,
    ) -> Result<bool, ManifestError> {
        let content = self.read(module)?;
        Ok(scan_needs_replacement(&content, pattern))
    }

    /// Collect the direct `family` dependencies of `module`
    pub fn find_dependency_update_targets(
        &self,
        module: &Module,
        family: &str,
    ) -> Result<BTreeSet<String>, ManifestError> {
        let content = self.read(module)?;
        Ok(scan_dependency_targets(&content, family))
    }
}
