//! Registry trait for resolving the version history of a package

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageVersionMap;

/// Trait for resolving package versions from a remote registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Resolves every stable version of a package with its framework tags
    ///
    /// # Arguments
    /// * `package_id` - The package identifier (e.g., "Newtonsoft.Json")
    ///
    /// # Returns
    /// * `Ok(PackageVersionMap)` - Versions ordered from oldest to newest
    /// * `Err(RegistryError::NotFound)` - The registry has no such package
    /// * `Err(RegistryError)` - Any other failure; nothing is returned for the package
    async fn resolve(&self, package_id: &str) -> Result<PackageVersionMap, RegistryError>;
}
