use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:8000/api/movies/";
pub const DEFAULT_OMDB_URL: &str = "https://www.omdbapi.com/";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Remote movie store
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_url")]
    pub base_url: String,
    /// Request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// OMDb title index used for autofill. The API key lives in the credentials file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OmdbConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_omdb_url")]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LookupConfig {
    /// Trimmed title length that starts a search
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// Drop search/detail responses superseded by a newer request
    #[serde(default = "default_true")]
    pub discard_stale_responses: bool,
}

fn default_true() -> bool {
    true
}

fn default_store_url() -> String {
    DEFAULT_STORE_URL.to_string()
}

fn default_omdb_url() -> String {
    DEFAULT_OMDB_URL.to_string()
}

fn default_min_query_chars() -> usize {
    2
}

fn default_max_candidates() -> usize {
    6
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_url(),
            timeout_secs: None,
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            base_url: default_omdb_url(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_query_chars: default_min_query_chars(),
            max_candidates: default_max_candidates(),
            discard_stale_responses: default_true(),
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = self.store.base_url.trim();
        if url.is_empty() {
            return Err(anyhow::anyhow!("store.base_url cannot be empty"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(anyhow::anyhow!("store.base_url must be an http(s) URL: {}", url));
        }
        if self.store.timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("store.timeout_secs must be positive (omit it for no timeout)"));
        }
        if self.omdb.enabled && self.omdb.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("omdb.base_url cannot be empty while omdb is enabled"));
        }
        if self.lookup.min_query_chars == 0 {
            return Err(anyhow::anyhow!("lookup.min_query_chars must be at least 1"));
        }
        if self.lookup.max_candidates == 0 {
            return Err(anyhow::anyhow!("lookup.max_candidates must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.store.base_url = "http://movies.local/api/movies/".to_string();
        config.store.timeout_secs = Some(15);
        config.lookup.discard_stale_responses = false;

        config.save_to_file(file.path()).unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.store.base_url, "http://movies.local/api/movies/");
        assert_eq!(loaded.store.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(loaded.lookup.discard_stale_responses, false);
        assert_eq!(loaded.lookup.max_candidates, 6);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.store.base_url, DEFAULT_STORE_URL);
        assert_eq!(config.store.timeout(), None);
        assert!(config.omdb.enabled);
        assert_eq!(config.lookup.min_query_chars, 2);
        assert_eq!(config.lookup.max_candidates, 6);
        assert!(config.lookup.discard_stale_responses);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[lookup]\nmax_candidates = 10\n").unwrap();
        assert_eq!(config.lookup.max_candidates, 10);
        assert_eq!(config.lookup.min_query_chars, 2);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.store.base_url, DEFAULT_STORE_URL);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.store.base_url = "ftp://example".to_string();
        assert!(config.validate().is_err());

        config.store.base_url = DEFAULT_STORE_URL.to_string();
        config.lookup.min_query_chars = 0;
        assert!(config.validate().is_err());

        config.lookup.min_query_chars = 2;
        config.store.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}
