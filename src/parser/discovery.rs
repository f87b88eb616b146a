//! Manifest discovery under a project root

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::parser::traits::Parser;

/// Recursively collect every file under `root` the parser can handle.
/// Entries are visited in file-name order so runs are reproducible.
pub fn find_manifests(root: &Path, parser: &dyn Parser) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut manifests = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_file() && parser.can_parse(path) {
            debug!("Found manifest: {:?}", path);
            manifests.push(path.to_path_buf());
        }
    }

    Ok(manifests)
}
