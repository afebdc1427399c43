//! Pin listing formatter
//!
//! Renders each manifest as a replacement requirements.txt body with every
//! declared package pinned to its latest version. The pinned version from the
//! manifest is not shown. Failed lookups are written as `Error` so the gap is
//! visible before the listing is saved over the original file.

use crate::domain::ManifestReport;
use crate::output::ReportFormatter;
use std::io::Write;

/// Formatter for generation mode
#[derive(Debug, Default)]
pub struct PinFormatter;

impl PinFormatter {
    /// Create a new pin formatter
    pub fn new() -> Self {
        Self
    }

    /// Header line naming the manifest being regenerated
    pub fn header(report: &ManifestReport) -> String {
        format!(
            "# {}/{} (latest pinned)",
            report.manifest.app_path(),
            report.manifest.file_name()
        )
    }
}

impl ReportFormatter for PinFormatter {
    fn format_manifest(
        &self,
        report: &ManifestReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", Self::header(report))?;
        for package in &report.packages {
            writeln!(
                writer,
                "{}",
                package.declaration.pin_to(package.latest.display_text())
            )?;
        }
        Ok(())
    }
}
