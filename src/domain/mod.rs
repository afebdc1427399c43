//! Core domain models for pinaudit
//!
//! This module contains the fundamental types used throughout the application:
//! - Discovered manifest references
//! - Exact-pin package declarations
//! - Latest version lookup results
//! - Per-manifest reports, comparison rows and run summaries
//! - The run mode selected on the command line

mod declaration;
mod latest;
mod manifest_ref;
mod mode;
mod report;

pub use declaration::PackageDeclaration;
pub use latest::{LatestVersion, LOOKUP_FAILED};
pub use manifest_ref::ManifestRef;
pub use mode::RunMode;
pub use report::{AuditSummary, ComparisonRow, ManifestReport, ResolvedPackage};
