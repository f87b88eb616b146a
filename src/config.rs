use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default base URL of the NuGet v3 flat container
pub const DEFAULT_REGISTRY_URL: &str = "https://api.nuget.org/v3-flatcontainer/";

/// Framework tag a version must declare to count as supporting the baseline
pub const BASELINE_FRAMEWORK: &str = ".NETStandard2.0";

/// Placeholder reported when no version qualifies
pub const NOT_AVAILABLE: &str = "NA";

/// File name of the manifests scanned under the project root
pub const MANIFEST_FILE_NAME: &str = "packages.config";

/// Versions containing this marker are pre-releases and are ignored
pub const PRERELEASE_MARKER: char = '-';

const APP_DIR_NAME: &str = "deps-upgrade-assistant";

/// Application configuration, read from `config.json` in the data directory
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub registry: RegistryConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Target framework tag used as the support threshold
    pub baseline: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            baseline: BASELINE_FRAMEWORK.to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// Returns the path to the data directory for deps-upgrade-assistant.
/// Uses $XDG_DATA_HOME/deps-upgrade-assistant if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/deps-upgrade-assistant,
/// or ./deps-upgrade-assistant if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the directory holding one cache file per package.
pub fn cache_dir() -> PathBuf {
    data_dir().join("cache")
}

/// Returns the path of the generated report.
pub fn report_path() -> PathBuf {
    data_dir().join("dua.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("dua.log")
}

/// Returns the path to the optional config file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn app_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<AppConfig>(json!({
            "analysis": {
                "baseline": "net8.0"
            }
        }))
        .unwrap();

        assert_eq!(result.analysis.baseline, "net8.0");
        assert_eq!(result.registry, RegistryConfig::default());
    }

    #[test]
    fn app_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<AppConfig>(json!({
            "registry": { "baseUrl": "http://localhost:8080/flat/" },
            "analysis": { "baseline": ".NETStandard2.1" }
        }))
        .unwrap();

        assert_eq!(
            result,
            AppConfig {
                registry: RegistryConfig {
                    base_url: "http://localhost:8080/flat/".to_string()
                },
                analysis: AnalysisConfig {
                    baseline: ".NETStandard2.1".to_string()
                },
            }
        );
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let config = AppConfig::load(&temp_dir.path().join("config.json")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.analysis.baseline, BASELINE_FRAMEWORK);
    }

    #[test]
    fn load_fails_on_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ registry: ").unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/deps-upgrade-assistant"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/deps-upgrade-assistant")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./deps-upgrade-assistant"));
    }
}
