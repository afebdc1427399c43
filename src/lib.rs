//! pinaudit - pinned requirements auditor library
//!
//! This library provides the building blocks of the audit pipeline:
//! - Shallow checkout of the marketplace apps repository
//! - Discovery of requirements.txt manifests
//! - Parsing of exact-pin declarations
//! - Latest version lookups against PyPI
//! - Comparison tables and regenerated pin listings

pub mod checkout;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
