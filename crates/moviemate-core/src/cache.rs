use chrono::{DateTime, Utc};
use moviemate_models::{FilterField, MovieDraft, MovieRecord, ParseNameError};
use moviemate_sources::{MovieStore, StoreError};
use tracing::{debug, info, warn};

use crate::filter::{self, FilterCriteria};

/// Client-held copy of the remote list
///
/// Only ever replaced wholesale by [`MovieCache::refresh`]; a failed refresh
/// keeps the previous list and records the error.
#[derive(Debug, Default)]
pub struct MovieCache {
    records: Vec<MovieRecord>,
    fetched_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl MovieCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Time of the last successful fetch
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Error of the most recent refresh, cleared by the next successful one
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.fetched_at.is_some()
    }

    pub fn find(&self, id: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Refetch the whole list; returns the number of records now held
    pub async fn refresh<S>(&mut self, store: &S) -> Result<usize, StoreError>
    where
        S: MovieStore + ?Sized,
    {
        match store.list().await {
            Ok(records) => {
                info!("Fetched {} movies from {}", records.len(), store.store_name());
                self.records = records;
                self.fetched_at = Some(Utc::now());
                self.last_error = None;
                Ok(self.records.len())
            }
            Err(e) => {
                warn!(
                    "Failed to fetch movie list from {}: {}. Keeping {} cached movies.",
                    store.store_name(),
                    e,
                    self.records.len()
                );
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Store, cache and the active filter, kept in step
///
/// Every successful create/update/delete is followed by a full list refetch;
/// the cache is never patched locally.
pub struct Library<S: MovieStore> {
    store: S,
    cache: MovieCache,
    criteria: FilterCriteria,
}

impl<S: MovieStore> Library<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: MovieCache::new(),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &MovieCache {
        &self.cache
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Fetch the list, keeping the old one on failure
    pub async fn load(&mut self) -> Result<usize, StoreError> {
        self.cache.refresh(&self.store).await
    }

    /// Full list filtered by the active criteria
    pub fn visible(&self) -> Vec<&MovieRecord> {
        filter::apply(&self.criteria, self.cache.records())
    }

    /// Options for a filter, always drawn from the full list
    pub fn options(&self, field: FilterField) -> Vec<String> {
        filter::options_for(field, self.cache.records())
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<(), ParseNameError> {
        self.criteria = self.criteria.clone().with_field(field, value)?;
        Ok(())
    }

    /// Clear all criteria and return the unfiltered list
    pub fn reset_filters(&mut self) -> Vec<&MovieRecord> {
        self.criteria = self.criteria.reset();
        self.visible()
    }

    /// Single record, always read from the store
    pub async fn get(&self, id: &str) -> Result<MovieRecord, StoreError> {
        self.store.get(id).await
    }

    pub async fn create(&mut self, draft: &MovieDraft) -> Result<MovieRecord, StoreError> {
        let created = self.store.create(draft).await.map_err(|e| {
            warn!("Failed to add {:?}: {}", draft.title, e);
            e
        })?;
        debug!("Created movie {} ({})", created.id, created.title);
        self.refetch().await;
        Ok(created)
    }

    pub async fn update(&mut self, id: &str, record: &MovieDraft) -> Result<MovieRecord, StoreError> {
        let updated = self.store.update(id, record).await.map_err(|e| {
            warn!("Failed to update movie {}: {}", id, e);
            e
        })?;
        debug!("Updated movie {}", id);
        self.refetch().await;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id).await.map_err(|e| {
            warn!("Failed to delete movie {}: {}", id, e);
            e
        })?;
        debug!("Deleted movie {}", id);
        self.refetch().await;
        Ok(())
    }

    /// The mutation already succeeded, so a failed refetch only marks the cache stale
    async fn refetch(&mut self) {
        let _ = self.cache.refresh(&self.store).await;
    }
}
