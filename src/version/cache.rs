//! In-memory package version cache backed by a [`CacheStore`]
//!
//! Each package is resolved from the registry at most once per process.
//! A resolved package is persisted before the lookup returns, so later
//! runs restore it from disk instead of going back to the registry.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::version::error::{AnalysisError, RegistryError};
use crate::version::registry::Registry;
use crate::version::store::CacheStore;
use crate::version::types::{CacheEntry, PackageVersionMap};

pub struct PackageVersionCache {
    packages: HashMap<String, PackageVersionMap>,
    registry: Box<dyn Registry>,
    store: Box<dyn CacheStore>,
}

impl PackageVersionCache {
    pub fn new(registry: Box<dyn Registry>, store: Box<dyn CacheStore>) -> Self {
        Self {
            packages: HashMap::new(),
            registry,
            store,
        }
    }

    /// Create a cache and restore every entry the store can load
    pub fn restore(registry: Box<dyn Registry>, store: Box<dyn CacheStore>) -> Self {
        let mut cache = Self::new(registry, store);
        let entries = cache.store.load_all();
        let count = cache.restore_all(entries);
        info!("Restored {} package entries", count);
        cache
    }

    /// Insert restored entries keyed by package id. A later entry with the
    /// same id replaces an earlier one. Returns the number of entries read.
    pub fn restore_all(&mut self, entries: Vec<CacheEntry>) -> usize {
        let count = entries.len();
        for entry in entries {
            let package_id = entry.package_id.clone();
            self.packages.insert(package_id, entry.into_map());
        }
        count
    }

    pub fn contains(&self, package_id: &str) -> bool {
        self.packages.contains_key(package_id)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Return the version map of a package, resolving it on first use
    ///
    /// A package unknown to the registry is kept as an empty map for the rest
    /// of the process but is not persisted.
    pub async fn get_or_populate(
        &mut self,
        package_id: &str,
    ) -> Result<&PackageVersionMap, AnalysisError> {
        if self.packages.contains_key(package_id) {
            debug!("Cache hit for {}", package_id);
            return Ok(&self.packages[package_id]);
        }

        let map = match self.registry.resolve(package_id).await {
            Ok(map) => {
                self.store.save(&CacheEntry::from_map(package_id, &map))?;
                info!("Cached {} versions for {}", map.len(), package_id);
                map
            }
            Err(RegistryError::NotFound(_)) => {
                info!("Package not found in registry: {}", package_id);
                PackageVersionMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(self.packages.entry(package_id.to_string()).or_insert(map))
    }
}
