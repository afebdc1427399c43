//! Output mode of a run

use std::fmt;

/// What a run prints for each manifest, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Table of current vs. latest versions
    #[default]
    Compare,
    /// Manifest body re-pinned to the latest versions
    Generate,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Compare => write!(f, "compare"),
            RunMode::Generate => write!(f, "generate"),
        }
    }
}
