//! Common types for version management

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Frameworks declared by a single published version
///
/// Field names match the cache files written by earlier releases of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    #[serde(rename = "Version")]
    pub version: String,
    /// Target framework tags in declaration order, duplicates kept
    #[serde(rename = "Tfs")]
    pub frameworks: Vec<String>,
}

impl VersionRecord {
    pub fn new(version: impl Into<String>, frameworks: Vec<String>) -> Self {
        Self {
            version: version.into(),
            frameworks,
        }
    }
}

/// Versions of one package, oldest first, each mapped to its framework tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageVersionMap {
    versions: IndexMap<String, Vec<String>>,
}

impl PackageVersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a version. A version already present keeps its position.
    pub fn insert(&mut self, version: String, frameworks: Vec<String>) {
        self.versions.insert(version, frameworks);
    }

    /// Framework tags declared by `version`, if it was published
    pub fn frameworks(&self, version: &str) -> Option<&[String]> {
        self.versions.get(version).map(Vec::as_slice)
    }

    /// Most recently published version
    pub fn latest(&self) -> Option<&str> {
        self.versions.last().map(|(v, _)| v.as_str())
    }

    /// Oldest version declaring `framework`
    pub fn first_supporting(&self, framework: &str) -> Option<&str> {
        self.versions
            .iter()
            .find(|(_, frameworks)| frameworks.iter().any(|f| f == framework))
            .map(|(v, _)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.versions
            .iter()
            .map(|(v, frameworks)| (v.as_str(), frameworks.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl FromIterator<VersionRecord> for PackageVersionMap {
    fn from_iter<I: IntoIterator<Item = VersionRecord>>(iter: I) -> Self {
        let mut map = Self::new();
        for record in iter {
            map.insert(record.version, record.frameworks);
        }
        map
    }
}

/// Persisted form of a [`PackageVersionMap`] together with its package id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(rename = "PkgId")]
    pub package_id: String,
    #[serde(rename = "VersionInfos")]
    pub versions: Vec<VersionRecord>,
}

impl CacheEntry {
    pub fn from_map(package_id: &str, map: &PackageVersionMap) -> Self {
        Self {
            package_id: package_id.to_string(),
            versions: map
                .iter()
                .map(|(v, frameworks)| VersionRecord::new(v, frameworks.to_vec()))
                .collect(),
        }
    }

    pub fn into_map(self) -> PackageVersionMap {
        self.versions.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> PackageVersionMap {
        [
            VersionRecord::new("1.0.0", vec![]),
            VersionRecord::new("2.0.0", vec![".NETStandard2.0".to_string()]),
            VersionRecord::new(
                "3.0.0",
                vec![".NETFramework4.5".to_string(), ".NETStandard2.0".to_string()],
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn latest_returns_last_inserted_version() {
        assert_eq!(sample_map().latest(), Some("3.0.0"));
        assert_eq!(PackageVersionMap::new().latest(), None);
    }

    #[test]
    fn first_supporting_returns_oldest_matching_version() {
        let map = sample_map();

        assert_eq!(map.first_supporting(".NETStandard2.0"), Some("2.0.0"));
        assert_eq!(map.first_supporting(".NETFramework4.5"), Some("3.0.0"));
        assert_eq!(map.first_supporting("net8.0"), None);
    }

    #[test]
    fn insertion_order_is_kept_regardless_of_version_ordering() {
        let mut map = PackageVersionMap::new();
        map.insert("10.0.0".to_string(), vec![]);
        map.insert("9.0.0".to_string(), vec![]);

        let versions: Vec<&str> = map.iter().map(|(v, _)| v).collect();
        assert_eq!(versions, vec!["10.0.0", "9.0.0"]);
        assert_eq!(map.latest(), Some("9.0.0"));
    }

    #[test]
    fn cache_entry_preserves_version_and_framework_order() {
        let map = sample_map();

        let entry = CacheEntry::from_map("Newtonsoft.Json", &map);

        assert_eq!(entry.package_id, "Newtonsoft.Json");
        assert_eq!(entry.versions[2].frameworks[0], ".NETFramework4.5");
        assert_eq!(entry.into_map(), map);
    }

    #[test]
    fn cache_entry_uses_legacy_field_names() {
        let entry = CacheEntry {
            package_id: "Foo".to_string(),
            versions: vec![VersionRecord::new("1.0.0", vec!["net45".to_string()])],
        };

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "PkgId": "Foo",
                "VersionInfos": [{ "Version": "1.0.0", "Tfs": ["net45"] }]
            })
        );
    }
}
