//! Pipeline selection

use std::fmt;

/// The two update pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Rewrite the go-ethereum => op-geth replace directive
    ReplaceFork,
    /// Pin direct dependencies of the optimism module family
    FamilyUpgrade,
}

impl Pipeline {
    /// Select the pipeline from the `--geth` flag
    pub fn from_geth_flag(geth: bool) -> Self {
        if geth {
            Pipeline::ReplaceFork
        } else {
            Pipeline::FamilyUpgrade
        }
    }

    /// Returns the display name for this pipeline
    pub fn display_name(&self) -> &'static str {
        match self {
            Pipeline::ReplaceFork => "op-geth replace",
            Pipeline::FamilyUpgrade => "optimism dependencies",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
