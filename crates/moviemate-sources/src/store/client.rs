use async_trait::async_trait;
use moviemate_models::{MovieDraft, MovieRecord};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::error::StoreError;
use crate::store::api;
use crate::traits::MovieStore;

/// Build the HTTP client for the store; `None` leaves requests without a timeout
pub fn create_store_client(timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder().user_agent(concat!("moviemate/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| Client::new())
}

/// HTTP gateway to the remote movie collection
#[derive(Clone)]
pub struct StoreClient {
    client: Arc<Client>,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = api::collection_url(&base_url.into());
        debug!("Using movie store at {}", base_url);
        Self {
            client: Arc::new(create_store_client(timeout)),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MovieStore for StoreClient {
    fn store_name(&self) -> &str {
        &self.base_url
    }

    async fn list(&self) -> Result<Vec<MovieRecord>, StoreError> {
        api::list_movies(&self.client, &self.base_url).await
    }

    async fn get(&self, id: &str) -> Result<MovieRecord, StoreError> {
        api::get_movie(&self.client, &self.base_url, id).await
    }

    async fn create(&self, draft: &MovieDraft) -> Result<MovieRecord, StoreError> {
        api::create_movie(&self.client, &self.base_url, draft).await
    }

    async fn update(&self, id: &str, record: &MovieDraft) -> Result<MovieRecord, StoreError> {
        api::update_movie(&self.client, &self.base_url, id, record).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        api::delete_movie(&self.client, &self.base_url, id).await
    }
}
