//! Registry test utilities

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use deps_upgrade_assistant::runner::RunPaths;
use deps_upgrade_assistant::version::error::RegistryError;
use deps_upgrade_assistant::version::registry::Registry;
use deps_upgrade_assistant::version::types::{PackageVersionMap, VersionRecord};

/// Registry stub backed by a map, counting every resolve call
#[derive(Default)]
pub struct StubRegistry {
    packages: HashMap<String, PackageVersionMap>,
    calls: Arc<AtomicUsize>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: &str, versions: &[(&str, &[&str])]) -> Self {
        self.packages.insert(package.to_string(), version_map(versions));
        self
    }

    /// Shared counter that stays readable after the registry is moved
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl Registry for StubRegistry {
    async fn resolve(&self, package_id: &str) -> Result<PackageVersionMap, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.packages
            .get(package_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(package_id.to_string()))
    }
}

pub fn version_map(versions: &[(&str, &[&str])]) -> PackageVersionMap {
    versions
        .iter()
        .map(|(v, tfs)| VersionRecord::new(*v, tfs.iter().map(|t| t.to_string()).collect()))
        .collect()
}

/// Run paths rooted in a temporary data directory
pub fn run_paths(data_dir: &Path) -> RunPaths {
    RunPaths {
        cache_dir: data_dir.join("cache"),
        report_path: data_dir.join("dua.json"),
    }
}

pub fn write_manifest(path: &Path, packages: &[(&str, &str)]) {
    let body: String = packages
        .iter()
        .map(|(id, version)| {
            format!(
                r#"  <package id="{}" version="{}" targetFramework="net472" />
"#,
                id, version
            )
        })
        .collect();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        path,
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<packages>\n{}</packages>\n",
            body
        ),
    )
    .unwrap();
}
