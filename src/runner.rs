//! Batch analysis of every manifest under a project root
//!
//! Manifests and the packages inside them are processed one at a time.
//! The report is written only after every manifest has been analyzed, so a
//! failed run leaves any previous report untouched.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::parser::{PackagesConfigParser, Parser, find_manifests};
use crate::report::{distinct_packages, write_report};
use crate::version::cache::PackageVersionCache;
use crate::version::checker::{Analyzer, Finding};
use crate::version::registries::NuGetRegistry;
use crate::version::registry::Registry;
use crate::version::store::DirectoryStore;

/// Locations used by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub cache_dir: PathBuf,
    pub report_path: PathBuf,
}

impl RunPaths {
    /// Paths under the default data directory
    pub fn from_data_dir() -> Self {
        Self {
            cache_dir: crate::config::cache_dir(),
            report_path: crate::config::report_path(),
        }
    }
}

/// Analyze every manifest under `root` against the NuGet registry from `config`
pub async fn run(root: &Path, config: &AppConfig, paths: &RunPaths) -> anyhow::Result<Vec<Finding>> {
    let registry = NuGetRegistry::new(&config.registry.base_url);
    run_with_registry(root, config, paths, Box::new(registry)).await
}

/// Analyze every manifest under `root`, resolving cache misses through `registry`
pub async fn run_with_registry(
    root: &Path,
    config: &AppConfig,
    paths: &RunPaths,
    registry: Box<dyn Registry>,
) -> anyhow::Result<Vec<Finding>> {
    info!("Project root path: {:?}", root);

    std::fs::create_dir_all(&paths.cache_dir)
        .with_context(|| format!("Failed to create cache directory {:?}", paths.cache_dir))?;
    if let Some(parent) = paths.report_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {:?}", parent))?;
    }

    let store = DirectoryStore::new(&paths.cache_dir);
    let cache = PackageVersionCache::restore(registry, Box::new(store));
    let mut analyzer = Analyzer::new(cache, config.analysis.baseline.clone());

    let parser = PackagesConfigParser::new();
    let manifests = find_manifests(root, &parser)
        .with_context(|| format!("Failed to scan {:?} for manifests", root))?;
    info!("Found {} manifests", manifests.len());

    let mut findings = Vec::new();
    for manifest in &manifests {
        findings.extend(analyze_manifest(&mut analyzer, &parser, manifest).await?);
    }

    write_report(&paths.report_path, &findings)?;
    info!(
        "Wrote {} package references ({} distinct packages) to {:?}",
        findings.len(),
        distinct_packages(&findings),
        paths.report_path
    );

    Ok(findings)
}

async fn analyze_manifest(
    analyzer: &mut Analyzer,
    parser: &dyn Parser,
    manifest: &Path,
) -> anyhow::Result<Vec<Finding>> {
    info!("Analyzing manifest: {:?}", manifest);

    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("Failed to read manifest {:?}", manifest))?;
    let packages = parser
        .parse(&content)
        .with_context(|| format!("Failed to parse manifest {:?}", manifest))?;

    let mut findings = Vec::with_capacity(packages.len());
    for package in packages {
        let finding = analyzer
            .analyze(&package.name, &package.version)
            .await
            .with_context(|| format!("Failed to analyze {}@{}", package.name, package.version))?;
        findings.push(finding);
    }

    Ok(findings)
}
