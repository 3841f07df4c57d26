use async_trait::async_trait;
use moviemate_models::{MovieDraft, MovieRecord, SearchHit, TitleDetails};

use crate::error::{LookupError, StoreError};

/// The remote collection of tracked titles
///
/// Implementations do no caching and no retries; each call is one request.
#[async_trait]
pub trait MovieStore: Send + Sync {
    fn store_name(&self) -> &str;

    async fn list(&self) -> Result<Vec<MovieRecord>, StoreError>;
    async fn get(&self, id: &str) -> Result<MovieRecord, StoreError>;
    /// The store assigns the id
    async fn create(&self, draft: &MovieDraft) -> Result<MovieRecord, StoreError>;
    /// Whole-record replace, not a partial patch
    async fn update(&self, id: &str, record: &MovieDraft) -> Result<MovieRecord, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Third-party search index used to autofill new entries
#[async_trait]
pub trait TitleIndex: Send + Sync {
    /// Keyword search. "No result" from the index is an empty list, not an error.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, LookupError>;

    /// Detail record by external id, `None` when the index has nothing
    async fn details(&self, external_id: &str) -> Result<Option<TitleDetails>, LookupError>;
}
