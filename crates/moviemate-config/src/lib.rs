pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, LookupConfig, OmdbConfig, StoreConfig, DEFAULT_OMDB_URL, DEFAULT_STORE_URL};
pub use credentials::{CredentialStore, OMDB_API_KEY_ENV};
pub use paths::{PathManager, base_path_override};
