//! CLI argument parsing module for update-op-deps

use crate::domain::{Pipeline, TargetVersion};
use crate::error::ConfigError;
use clap::{ArgAction, Parser};

/// Sync go.mod files with op-geth or the optimism module family
#[derive(Parser, Debug, Clone)]
#[command(
    name = "update-op-deps",
    about = "Sync go.mod files with op-geth or the optimism module family",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Version to upgrade to (tag, commit hash or semantic version)
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Update the op-geth replace directive rather than optimism dependencies
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_geth")]
    pub geth: bool,

    /// Update optimism dependencies (default)
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "geth")]
    pub no_geth: bool,
}

impl CliArgs {
    /// Pipeline selected by `--geth` / `--no-geth`
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::from_geth_flag(self.geth && !self.no_geth)
    }

    /// Validated target version
    pub fn target_version(&self) -> Result<TargetVersion, ConfigError> {
        TargetVersion::new(self.version.as_str())
    }
}
