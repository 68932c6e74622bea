use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AlumniError, Result};
use crate::search::{MAX_PROJECT_RESULTS, MAX_RESULTS};

/// File name of the per-project config.
pub const PROJECT_CONFIG_FILE: &str = "alumni.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub tracking: TrackingConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("ALUMNI_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            tracing::debug!("no config directory, skipping global config");
            return Ok(None);
        };
        Self::load_patch(&dir.join("alumni/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| AlumniError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw).map_err(|err| {
            AlumniError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.backend {
            self.backend.merge(patch);
        }
        if let Some(patch) = patch.tracking {
            self.tracking.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.server {
            self.server.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_bool("ALUMNI_BACKEND_ENABLED") {
            self.backend.enabled = value;
        }
        if let Some(value) = env_string("DJANGO_API_URL") {
            self.backend.base_url = value;
        }
        if let Some(value) = env_string("ALUMNI_BACKEND_URL") {
            self.backend.base_url = value;
        }
        if let Some(value) = env_u64("ALUMNI_BACKEND_TIMEOUT_SECS")? {
            self.backend.timeout_secs = value;
        }

        if let Some(value) = env_bool("ALUMNI_TRACKING_ENABLED") {
            self.tracking.enabled = value;
        }

        if let Some(value) = env_usize("ALUMNI_SEARCH_MAX_RESULTS")? {
            self.search.max_results = value;
        }
        if let Some(value) = env_usize("ALUMNI_SEARCH_MAX_PROJECT_RESULTS")? {
            self.search.max_project_results = value;
        }

        if let Some(value) = env_string("ALUMNI_SERVER_BIND") {
            self.server.bind = value;
        }

        Ok(())
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> Result<()> {
        if self.backend.enabled {
            if self.backend.base_url.trim().is_empty() {
                return Err(AlumniError::MissingConfig(
                    "backend.base_url is required when the backend is enabled".to_string(),
                ));
            }
            if !self.backend.base_url.starts_with("http://")
                && !self.backend.base_url.starts_with("https://")
            {
                return Err(AlumniError::Config(format!(
                    "backend.base_url must be an http(s) URL, got {}",
                    self.backend.base_url
                )));
            }
        }
        if self.backend.timeout_secs == 0 {
            return Err(AlumniError::Config(
                "backend.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.search.max_results == 0 || self.search.max_project_results == 0 {
            return Err(AlumniError::Config(
                "search result limits must be greater than zero".to_string(),
            ));
        }
        if self.search.max_results > MAX_RESULTS {
            return Err(AlumniError::Config(format!(
                "search.max_results must be at most {MAX_RESULTS}, got {}",
                self.search.max_results
            )));
        }
        if self.search.max_project_results > MAX_PROJECT_RESULTS {
            return Err(AlumniError::Config(format!(
                "search.max_project_results must be at most {MAX_PROJECT_RESULTS}, got {}",
                self.search.max_project_results
            )));
        }
        Ok(())
    }
}

/// Directory backend connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 5,
        }
    }
}

impl BackendConfig {
    fn merge(&mut self, patch: BackendPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.base_url {
            self.base_url = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub enabled: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl TrackingConfig {
    fn merge(&mut self, patch: TrackingPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    pub max_project_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            max_project_results: MAX_PROJECT_RESULTS,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
        if let Some(value) = patch.max_project_results {
            self.max_project_results = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl ServerConfig {
    fn merge(&mut self, patch: ServerPatch) {
        if let Some(value) = patch.bind {
            self.bind = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub backend: Option<BackendPatch>,
    pub tracking: Option<TrackingPatch>,
    pub search: Option<SearchPatch>,
    pub server: Option<ServerPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BackendPatch {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TrackingPatch {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub max_results: Option<usize>,
    pub max_project_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerPatch {
    pub bind: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    std::env::var(key).map_or(Ok(None), |value| parse_env(key, &value).map(Some))
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    std::env::var(key).map_or(Ok(None), |value| parse_env(key, &value).map(Some))
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| AlumniError::Config(format!("invalid {key} value {value}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert!(config.backend.enabled);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend.timeout(), Duration::from_secs(5));
        assert!(config.tracking.enabled);
        assert_eq!(config.search.max_results, 10);
        assert_eq!(config.search.max_project_results, 5);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.backend.base_url, deserialized.backend.base_url);
        assert_eq!(config.server.bind, deserialized.server.bind);
    }

    // =========================================================================
    // Config::load_patch tests (file-based)
    // =========================================================================

    #[test]
    fn load_patch_nonexistent_file() {
        let result = Config::load_patch(Path::new("/nonexistent/path/alumni.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_patch_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("alumni.toml");
        std::fs::write(
            &path,
            r#"
[backend]
base_url = "http://directory.internal:9000"
"#,
        )
        .unwrap();

        let patch = Config::load_patch(&path).unwrap().unwrap();
        let backend = patch.backend.unwrap();
        assert_eq!(backend.base_url.as_deref(), Some("http://directory.internal:9000"));
        assert!(backend.enabled.is_none());
        assert!(patch.search.is_none());
    }

    #[test]
    fn load_patch_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("alumni.toml");
        std::fs::write(&path, "this is not valid toml [[[").unwrap();

        let err = Config::load_patch(&path).unwrap_err();
        assert!(matches!(err, AlumniError::Config(_)));
    }

    // =========================================================================
    // Merge
    // =========================================================================

    #[test]
    fn merge_patch_updates_only_given_values() {
        let mut config = Config::default();
        config.merge_patch(ConfigPatch {
            backend: Some(BackendPatch {
                enabled: Some(false),
                ..Default::default()
            }),
            search: Some(SearchPatch {
                max_results: Some(3),
                max_project_results: None,
            }),
            ..Default::default()
        });

        assert!(!config.backend.enabled);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.search.max_project_results, 5);
    }

    #[test]
    fn merge_patch_empty_noop() {
        let mut config = Config::default();
        config.merge_patch(ConfigPatch::default());
        assert!(config.tracking.enabled);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn later_patch_wins() {
        let mut config = Config::default();
        config.merge_patch(ConfigPatch {
            server: Some(ServerPatch {
                bind: Some("0.0.0.0:1".to_string()),
            }),
            ..Default::default()
        });
        config.merge_patch(ConfigPatch {
            server: Some(ServerPatch {
                bind: Some("0.0.0.0:2".to_string()),
            }),
            ..Default::default()
        });
        assert_eq!(config.server.bind, "0.0.0.0:2");
    }

    // =========================================================================
    // Validation and env parsing
    // =========================================================================

    #[test]
    fn validate_rejects_bad_backend_url() {
        let mut config = Config::default();
        config.backend.base_url = "directory:8000".to_string();
        assert!(matches!(config.validate(), Err(AlumniError::Config(_))));

        config.backend.base_url = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(AlumniError::MissingConfig(_))
        ));

        // irrelevant when the backend is off
        config.backend.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.search.max_results = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.backend.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_caps_result_limits() {
        let mut config = Config::default();
        config.search.max_results = MAX_RESULTS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search.max_results"));

        let mut config = Config::default();
        config.search.max_project_results = MAX_PROJECT_RESULTS + 1;
        assert!(matches!(config.validate(), Err(AlumniError::Config(_))));

        let mut config = Config::default();
        config.search.max_results = MAX_RESULTS;
        config.search.max_project_results = MAX_PROJECT_RESULTS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_keys_deserialize_to_defaults() {
        let config: Config = toml::from_str("[backend]\ntimeout_secs = 9\n\n[tracking]\n").unwrap();
        assert!(config.backend.enabled);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend.timeout_secs, 9);
        assert!(config.tracking.enabled);
        assert_eq!(config.search.max_results, MAX_RESULTS);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn parse_env_reports_key() {
        let err = parse_env::<u64>("ALUMNI_BACKEND_TIMEOUT_SECS", "soon").unwrap_err();
        assert!(err.to_string().contains("ALUMNI_BACKEND_TIMEOUT_SECS"));
        assert_eq!(parse_env::<usize>("X", " 7 ").unwrap(), 7);
    }

    // =========================================================================
    // Config::load tests (integration)
    // =========================================================================

    #[test]
    fn load_from_explicit_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.toml");
        std::fs::write(
            &config_path,
            r#"
[tracking]
enabled = false
"#,
        )
        .unwrap();

        let config = Config::load(Some(&config_path), temp.path()).unwrap();
        assert!(!config.tracking.enabled);
    }

    #[test]
    fn load_project_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(PROJECT_CONFIG_FILE),
            r#"
[server]
bind = "127.0.0.1:4100"
"#,
        )
        .unwrap();

        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:4100");
    }

    #[test]
    fn load_rejects_invalid_file_values() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.toml");
        std::fs::write(&config_path, "[search]\nmax_results = 0\n").unwrap();

        assert!(Config::load(Some(&config_path), temp.path()).is_err());
    }
}
