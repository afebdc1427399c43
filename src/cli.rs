//! CLI argument parsing module for pinaudit

use clap::{ArgAction, Parser};

use crate::domain::RunMode;
use crate::manifest::normalize_filters;

const EXAMPLES: &str = "\
Examples:

  Show all current vs. latest package versions across all apps:
    pinaudit

  Show version info for specific apps:
    pinaudit -a linode-marketplace-postgresql -a linode-marketplace-wordpress

  Or comma-separated:
    pinaudit -a linode-marketplace-postgresql,linode-marketplace-wordpress

  Generate updated pinned versions for all apps:
    pinaudit -g

  Generate updated pinned versions for specific apps:
    pinaudit -a linode-marketplace-postgresql -a linode-marketplace-wordpress -g
";

/// Check or generate pinned Python package versions for marketplace app requirements
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pinaudit",
    version,
    about = "Check or generate pinned Python package versions for marketplace app requirements",
    after_help = EXAMPLES
)]
pub struct CliArgs {
    /// Filter by app directory name(s). Can be specified multiple times or as a comma-separated list
    #[arg(short, long = "app", value_name = "APP", action = ArgAction::Append)]
    pub apps: Vec<String>,

    /// Generate new pinned requirements with latest versions
    #[arg(short, long = "gen")]
    pub generate: bool,
}

impl CliArgs {
    /// Normalized app filters (split on commas, trimmed, lowercased)
    pub fn app_filters(&self) -> Vec<String> {
        normalize_filters(&self.apps)
    }

    /// The run mode selected by the flags
    pub fn mode(&self) -> RunMode {
        if self.generate {
            RunMode::Generate
        } else {
            RunMode::Compare
        }
    }
}
