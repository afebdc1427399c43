//! Manifest discovery and parsing
//!
//! This module provides functionality to:
//! - Locate requirements.txt manifests under a repository root
//! - Filter them by case-insensitive app substrings
//! - Extract exact-pin declarations from their content

mod locator;
mod requirements;

pub use locator::{locate_manifests, normalize_filters, MANIFEST_FILENAME};
pub use requirements::{parse_line, parse_requirements, read_requirements};
