use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviemate_config::{Config, CredentialStore, PathManager};
use moviemate_core::{Library, LookupSettings};
use moviemate_sources::{OmdbClient, StoreClient};
use std::path::PathBuf;
use tracing::debug;

/// Everything a command needs from disk, loaded once per invocation
pub struct AppContext {
    pub paths: PathManager,
    pub config_file: PathBuf,
    pub config: Config,
    pub credentials: CredentialStore,
}

impl AppContext {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let paths = PathManager::default();
        let config_file = config_override.unwrap_or_else(|| paths.config_file());

        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        let mut credentials = CredentialStore::new(paths.credentials_file());
        credentials
            .load()
            .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

        debug!("Loaded config from {}", config_file.display());
        Ok(Self {
            paths,
            config_file,
            config,
            credentials,
        })
    }

    /// Validated here rather than at load so `config` can still repair a bad file
    pub fn library(&self) -> Result<Library<StoreClient>> {
        self.config
            .validate()
            .map_err(|e| eyre!("Invalid config in {}: {}", self.config_file.display(), e))?;
        let store = StoreClient::with_timeout(self.config.store.base_url.clone(), self.config.store.timeout());
        Ok(Library::new(store))
    }

    /// `None` when lookups are disabled in config
    pub fn title_index(&self) -> Option<OmdbClient> {
        if !self.config.omdb.enabled {
            debug!("OMDb lookups disabled in config");
            return None;
        }
        Some(OmdbClient::with_base_url(
            self.config.omdb.base_url.clone(),
            self.credentials.resolve_omdb_api_key(),
        ))
    }

    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings::from(&self.config.lookup)
    }
}
