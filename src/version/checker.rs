//! Baseline compatibility check for declared packages

use serde::Serialize;
use tracing::info;

use crate::config::NOT_AVAILABLE;
use crate::version::cache::PackageVersionCache;
use crate::version::error::AnalysisError;
use crate::version::types::PackageVersionMap;

/// Compatibility of one declared (package, version) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub package_name: String,
    /// Version declared in the manifest
    pub version: String,
    /// Whether the declared version targets the baseline framework
    pub supports_baseline: bool,
    /// Most recently published stable version, or `NA`
    pub latest_version: String,
    /// Oldest stable version targeting the baseline framework, or `NA`
    pub minimal_baseline_version: String,
}

/// Build a finding from an already resolved version map
pub fn evaluate(
    package_id: &str,
    declared_version: &str,
    versions: &PackageVersionMap,
    baseline: &str,
) -> Finding {
    let supports_baseline = versions
        .frameworks(declared_version)
        .is_some_and(|frameworks| frameworks.iter().any(|f| f == baseline));

    Finding {
        package_name: package_id.to_string(),
        version: declared_version.to_string(),
        supports_baseline,
        latest_version: versions.latest().unwrap_or(NOT_AVAILABLE).to_string(),
        minimal_baseline_version: versions
            .first_supporting(baseline)
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
    }
}

/// Resolves declared packages through the cache and checks them against the baseline
pub struct Analyzer {
    cache: PackageVersionCache,
    baseline: String,
}

impl Analyzer {
    pub fn new(cache: PackageVersionCache, baseline: impl Into<String>) -> Self {
        Self {
            cache,
            baseline: baseline.into(),
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn cache(&self) -> &PackageVersionCache {
        &self.cache
    }

    pub async fn analyze(
        &mut self,
        package_id: &str,
        declared_version: &str,
    ) -> Result<Finding, AnalysisError> {
        info!("Processing: {}@{}", package_id, declared_version);
        let versions = self.cache.get_or_populate(package_id).await?;
        Ok(evaluate(
            package_id,
            declared_version,
            versions,
            &self.baseline,
        ))
    }
}
