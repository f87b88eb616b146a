//! Durable storage of cache entries, one JSON file per package

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::version::error::CacheError;
use crate::version::types::CacheEntry;

/// Trait for loading and saving persisted cache entries
#[cfg_attr(test, automock)]
pub trait CacheStore: Send + Sync {
    /// Load every readable entry. Malformed records are skipped.
    fn load_all(&self) -> Vec<CacheEntry>;

    /// Write or replace the record for `entry.package_id`
    fn save(&self, entry: &CacheEntry) -> Result<(), CacheError>;
}

/// Stores each entry as `<dir>/<package id>.json`
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, package_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", package_id))
    }

    fn read_entry(path: &Path) -> Option<CacheEntry> {
        let content = fs::read_to_string(path)
            .inspect_err(|e| warn!("Failed to read cache file {:?}: {}", path, e))
            .ok()?;

        serde_json::from_str(&content)
            .inspect_err(|e| warn!("Skipping malformed cache file {:?}: {}", path, e))
            .ok()
    }
}

impl CacheStore for DirectoryStore {
    fn load_all(&self) -> Vec<CacheEntry> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Failed to read cache directory {:?}: {}", self.dir, e);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let entries: Vec<CacheEntry> = paths.iter().filter_map(|p| Self::read_entry(p)).collect();
        debug!(
            "Loaded {} of {} cache files from {:?}",
            entries.len(),
            paths.len(),
            self.dir
        );
        entries
    }

    fn save(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        let path = self.entry_path(&entry.package_id);
        let tmp_path = path.with_extension("json.tmp");

        let content = serde_json::to_string(entry)?;
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &path)?;

        debug!(
            "Saved {} versions for {} to {:?}",
            entry.versions.len(),
            entry.package_id,
            path
        );
        Ok(())
    }
}
