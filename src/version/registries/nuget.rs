//! NuGet flat container API implementation
//!
//! Two endpoints are used:
//! - `{id}/index.json` lists every published version
//! - `{id}/{version}/{id}.nuspec` holds the manifest of a single version
//!
//! Both expect lowercased path segments.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_REGISTRY_URL, PRERELEASE_MARKER};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::PackageVersionMap;

/// Response from the version list endpoint
#[derive(Debug, Deserialize)]
struct VersionsResponse {
    versions: Vec<String>,
}

/// Registry implementation for the NuGet v3 flat container
pub struct NuGetRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NuGetRegistry {
    /// Creates a new NuGetRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("deps-upgrade-assistant")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_versions(&self, package_id: &str) -> Result<Vec<String>, RegistryError> {
        let url = format!(
            "{}/{}/index.json",
            self.base_url,
            package_id.to_lowercase()
        );
        debug!("Fetching version list: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_id.to_string()));
        }

        if !status.is_success() {
            warn!("NuGet registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "can not find package versions: {} (status {})",
                package_id, status
            )));
        }

        let body: VersionsResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse version list for {}: {}", package_id, e);
            RegistryError::InvalidResponse(format!(
                "can not find package versions: {}: {}",
                package_id, e
            ))
        })?;

        Ok(body.versions)
    }

    async fn fetch_nuspec(&self, package_id: &str, version: &str) -> Result<String, RegistryError> {
        let id = package_id.to_lowercase();
        let url = format!(
            "{}/{}/{}/{}.nuspec",
            self.base_url,
            id,
            version.to_lowercase(),
            id
        );

        let nuspec = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(nuspec)
    }
}

impl Default for NuGetRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }
}

#[async_trait::async_trait]
impl Registry for NuGetRegistry {
    async fn resolve(&self, package_id: &str) -> Result<PackageVersionMap, RegistryError> {
        let versions = self.fetch_versions(package_id).await?;
        let mut map = PackageVersionMap::new();

        for version in versions
            .into_iter()
            .filter(|v| !v.contains(PRERELEASE_MARKER))
        {
            info!("Fetching nuspec: {}/{}", package_id, version);
            let nuspec = self.fetch_nuspec(package_id, &version).await?;
            let frameworks = extract_target_frameworks(&nuspec)?;
            info!(
                "Frameworks for {}/{}: {}",
                package_id,
                version,
                frameworks.join(",")
            );
            map.insert(version, frameworks);
        }

        Ok(map)
    }
}

/// Extract the target framework of every dependency group in a nuspec document
///
/// Elements are matched by local name only; nuspec namespaces differ between
/// schema versions. A group without a `targetFramework` attribute contributes
/// an empty tag.
pub fn extract_target_frameworks(nuspec: &str) -> Result<Vec<String>, RegistryError> {
    let doc = roxmltree::Document::parse(nuspec)
        .map_err(|e| RegistryError::InvalidResponse(format!("Invalid nuspec: {}", e)))?;

    let frameworks = doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "group")
        .filter(|node| {
            node.parent_element()
                .is_some_and(|parent| parent.tag_name().name() == "dependencies")
        })
        .map(|node| node.attribute("targetFramework").unwrap_or_default().to_string())
        .collect();

    Ok(frameworks)
}
