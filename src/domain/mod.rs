//! Core domain models for update-op-deps
//!
//! This module contains the fundamental types used throughout the application:
//! - Module identifiers and the ordered module registry
//! - Pipeline selection
//! - The target version applied to every update
//! - Run summary structures

mod module;
mod pipeline;
mod summary;
mod version;

pub use module::{Module, ModuleRegistry};
pub use pipeline::Pipeline;
pub use summary::{ModuleOutcome, RunSummary};
pub use version::TargetVersion;
