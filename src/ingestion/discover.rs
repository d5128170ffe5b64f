//! Recursive data-file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::EtlResult;

/// Recursively collect every file under `root` whose extension equals
/// `extension` (compared without the dot, exactly and case-sensitively, so
/// `"json"` does not match `data.JSON`).
///
/// Returned paths are absolute, in traversal order. Directories and
/// non-matching files are skipped silently; a missing or unreadable `root`
/// is an error. An existing root containing no matches yields an empty list.
pub fn discover_files(root: impl AsRef<Path>, extension: &str) -> EtlResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(std::path::absolute(entry.path())?);
        }
    }
    Ok(files)
}
