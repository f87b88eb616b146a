//! Common types for parsers

/// A package pinned by a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Package id (e.g., "Newtonsoft.Json")
    pub name: String,
    /// Version pinned in the manifest, empty when the attribute is missing
    pub version: String,
}

impl PackageInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
