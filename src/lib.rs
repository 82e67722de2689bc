//! update-op-deps - go.mod synchronization library
//!
//! This library keeps a fixed set of Go modules in sync with:
//! - op-geth (replace directive for go-ethereum)
//! - the optimism module family (direct dependency pins)

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod runner;
pub mod toolchain;
pub mod update;
