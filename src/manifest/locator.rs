//! Requirements manifest discovery
//!
//! Features:
//! - Recursive walk of the repository tree (symlinks are not followed)
//! - Case-insensitive substring filtering on the relative manifest path
//! - Deterministic, sorted output

use crate::domain::ManifestRef;
use crate::error::IoError;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// File name of the manifests this tool audits
pub const MANIFEST_FILENAME: &str = "requirements.txt";

/// Flatten raw `--app` values into lowercase filter substrings
///
/// Each raw value may itself be a comma-separated list. Pieces are trimmed and
/// empty pieces are dropped.
pub fn normalize_filters<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == ".git"
}

fn matches_filters(manifest: &ManifestRef, filters: &[String]) -> bool {
    if filters.is_empty() {
        return true;
    }
    let folded = manifest.folded_path();
    filters.iter().any(|f| folded.contains(f.as_str()))
}

/// Find every requirements manifest under `root` that matches `filters`
///
/// `filters` are expected in normalized form (see [`normalize_filters`]); an
/// empty slice keeps every manifest. Matching is a plain substring test on the
/// lowercased path relative to `root`, so `sql` also matches `mysql-extras`.
pub fn locate_manifests(root: &Path, filters: &[String]) -> Result<Vec<ManifestRef>, IoError> {
    let mut manifests = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_git_dir(e));

    for entry in walker {
        let entry = entry.map_err(|e| IoError::walk(root, e))?;
        if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILENAME {
            continue;
        }

        let manifest = ManifestRef::new(entry.path(), root);
        if matches_filters(&manifest, filters) {
            manifests.push(manifest);
        } else {
            debug!(path = %manifest.relative.display(), "manifest filtered out");
        }
    }

    manifests.sort();
    debug!(count = manifests.len(), "located manifests");
    Ok(manifests)
}
