use async_trait::async_trait;
use moviemate_models::{SearchHit, TitleDetails};
use reqwest::Client;
use std::sync::Arc;
use tracing::warn;

use crate::error::LookupError;
use crate::omdb::api;
use crate::traits::TitleIndex;

/// OMDb-backed title index
#[derive(Clone)]
pub struct OmdbClient {
    client: Arc<Client>,
    base_url: String,
    api_key: Option<String>,
}

impl OmdbClient {
    /// A missing key is allowed; lookups then fail with `MissingApiKey`
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api::API_BASE, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!("OMDb API key is not set; title suggestions are disabled. Run `moviemate config set-api-key`.");
        }
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, LookupError> {
        self.api_key.as_deref().ok_or(LookupError::MissingApiKey)
    }
}

#[async_trait]
impl TitleIndex for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
        api::search_titles(&self.client, &self.base_url, self.api_key()?, query).await
    }

    async fn details(&self, external_id: &str) -> Result<Option<TitleDetails>, LookupError> {
        api::get_title_details(&self.client, &self.base_url, self.api_key()?, external_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let client = OmdbClient::with_base_url("http://127.0.0.1:9/", None);
        assert!(!client.has_api_key());
        assert!(matches!(client.search("alien").await, Err(LookupError::MissingApiKey)));
        assert!(matches!(client.details("tt0078748").await, Err(LookupError::MissingApiKey)));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let client = OmdbClient::new(Some("  ".to_string()));
        assert!(!client.has_api_key());
    }
}
