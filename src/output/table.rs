//! Comparison table formatter
//!
//! Renders one plain-text table per manifest:
//! - a blank separator line
//! - the header row and a dashed rule sized to each column
//! - one row per declaration, in declaration order
//!
//! Columns are left aligned and separated by two spaces. The last column is
//! not padded, so no line carries trailing spaces, colored or not.

use crate::domain::{ComparisonRow, ManifestReport};
use crate::output::ReportFormatter;
use colored::Colorize;
use std::io::Write;

/// Column headers
pub const HEADERS: [&str; 4] = ["App Path", "Package", "Current", "Latest"];

const COLUMN_GAP: &str = "  ";

/// Table formatter for comparison mode
pub struct ComparisonFormatter {
    /// Whether to use colors
    color: bool,
}

impl ComparisonFormatter {
    /// Create a new formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Width of each column: the widest of its header and cells
    fn column_widths(rows: &[ComparisonRow]) -> [usize; 4] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Pad every cell but the last to its column width
    fn pad(cells: [&str; 4], widths: &[usize; 4]) -> [String; 4] {
        std::array::from_fn(|i| {
            if i + 1 == cells.len() {
                cells[i].to_string()
            } else {
                format!("{:<width$}", cells[i], width = widths[i])
            }
        })
    }

    fn write_line(writer: &mut dyn Write, cells: &[String]) -> std::io::Result<()> {
        writeln!(writer, "{}", cells.join(COLUMN_GAP))
    }

    fn header_cells(&self, widths: &[usize; 4]) -> [String; 4] {
        let cells = Self::pad(HEADERS, widths);
        if self.color {
            cells.map(|cell| cell.bold().to_string())
        } else {
            cells
        }
    }

    fn row_cells(&self, row: &ComparisonRow, widths: &[usize; 4]) -> [String; 4] {
        let mut cells = Self::pad(row.cells(), widths);

        if self.color {
            let latest = cells[3].as_str();
            let styled = if row.lookup_failed {
                latest.red()
            } else if row.latest != row.current {
                latest.yellow()
            } else {
                latest.green()
            };
            cells[3] = styled.to_string();
        }
        cells
    }
}

impl ReportFormatter for ComparisonFormatter {
    fn format_manifest(
        &self,
        report: &ManifestReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let rows = report.comparison_rows();
        let widths = Self::column_widths(&rows);

        writeln!(writer)?;
        Self::write_line(writer, &self.header_cells(&widths))?;
        let rule = widths.map(|w| "-".repeat(w));
        Self::write_line(writer, &rule)?;
        for row in &rows {
            Self::write_line(writer, &self.row_cells(row, &widths))?;
        }
        Ok(())
    }
}
