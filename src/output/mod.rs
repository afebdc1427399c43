//! Output formatting for manifest reports
//!
//! This module provides:
//! - Comparison tables of current vs. latest versions
//! - Regenerated pin listings using the latest versions

mod pins;
mod table;

pub use pins::PinFormatter;
pub use table::{ComparisonFormatter, HEADERS};

use crate::domain::{ManifestReport, RunMode};
use std::io::Write;

/// Message printed when no manifest survives the app filters
pub const NO_MANIFESTS_MESSAGE: &str = "No requirements.txt found matching the specified app(s).";

/// Trait for output formatters
pub trait ReportFormatter {
    /// Format and write the report of a single manifest
    fn format_manifest(
        &self,
        report: &ManifestReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create an output formatter for the run mode
pub fn create_formatter(mode: RunMode, color: bool) -> Box<dyn ReportFormatter> {
    match mode {
        RunMode::Compare => Box::new(ComparisonFormatter::with_color(color)),
        RunMode::Generate => Box::new(PinFormatter::new()),
    }
}
