//! Title search and autofill for a draft that has not been submitted yet.
//!
//! The flow is driven by UI events: [`LookupAssist::title_input`] hands out a
//! [`SearchTicket`] when a search should be sent, the caller performs the
//! request and feeds the outcome back through [`LookupAssist::finish_search`].
//! Selection works the same way with [`DetailTicket`]s. The async helpers
//! [`LookupAssist::search`] and [`LookupAssist::choose`] do both halves in one
//! call for sequential callers.
//!
//! Lookup failures never reach the user. They arrive as `Err(LookupError)`,
//! are logged, and the state stays as it was.

use moviemate_config::LookupConfig;
use moviemate_models::lookup::is_present;
use moviemate_models::{MovieDraft, SearchHit, TitleDetails};
use moviemate_sources::{LookupError, TitleIndex};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    /// Candidate list closed
    Idle,
    /// A search is in flight
    Searching,
    ResultsShown,
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub min_query_chars: usize,
    pub max_candidates: usize,
    /// Ignore responses superseded by a newer request of the same kind
    pub discard_stale_responses: bool,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self::from(&LookupConfig::default())
    }
}

impl From<&LookupConfig> for LookupSettings {
    fn from(config: &LookupConfig) -> Self {
        Self {
            min_query_chars: config.min_query_chars,
            max_candidates: config.max_candidates,
            discard_stale_responses: config.discard_stale_responses,
        }
    }
}

/// Issued search; hand it back with the outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// Issued detail fetch for a selected candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub seq: u64,
    pub external_id: String,
}

#[derive(Debug)]
pub struct LookupAssist {
    settings: LookupSettings,
    draft: MovieDraft,
    phase: LookupPhase,
    /// Phase to fall back to when a search fails
    phase_before_search: LookupPhase,
    candidates: Vec<SearchHit>,
    search_seq: u64,
    detail_seq: u64,
    detail_pending: bool,
}

impl LookupAssist {
    pub fn new(settings: LookupSettings) -> Self {
        Self::with_draft(settings, MovieDraft::default())
    }

    pub fn with_draft(settings: LookupSettings, draft: MovieDraft) -> Self {
        Self {
            settings,
            draft,
            phase: LookupPhase::Idle,
            phase_before_search: LookupPhase::Idle,
            candidates: Vec::new(),
            search_seq: 0,
            detail_seq: 0,
            detail_pending: false,
        }
    }

    pub fn phase(&self) -> LookupPhase {
        self.phase
    }

    pub fn candidates(&self) -> &[SearchHit] {
        &self.candidates
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Direct edits to fields the lookup does not own (platform, episodes, ...)
    pub fn draft_mut(&mut self) -> &mut MovieDraft {
        &mut self.draft
    }

    pub fn into_draft(self) -> MovieDraft {
        self.draft
    }

    pub fn is_fetching_details(&self) -> bool {
        self.detail_pending
    }

    /// The title field changed
    ///
    /// Returns a ticket when the trimmed text is long enough to search. Shorter
    /// text closes the list and drops candidates at once, even with a search in
    /// flight.
    pub fn title_input(&mut self, text: &str) -> Option<SearchTicket> {
        self.draft.title = text.to_string();
        let query = text.trim();

        // Either way any outstanding search is now superseded
        self.search_seq += 1;

        if query.chars().count() < self.settings.min_query_chars {
            self.candidates.clear();
            self.phase = LookupPhase::Idle;
            return None;
        }

        if self.phase != LookupPhase::Searching {
            self.phase_before_search = self.phase;
        }
        self.phase = LookupPhase::Searching;
        Some(SearchTicket {
            seq: self.search_seq,
            query: query.to_string(),
        })
    }

    /// Apply a search outcome. Returns false when the response was discarded or failed.
    pub fn finish_search(&mut self, ticket: SearchTicket, result: Result<Vec<SearchHit>, LookupError>) -> bool {
        if self.settings.discard_stale_responses && ticket.seq != self.search_seq {
            debug!(
                "Discarding stale search response for {:?} (seq {}, latest {})",
                ticket.query, ticket.seq, self.search_seq
            );
            return false;
        }

        match result {
            Ok(mut hits) if !hits.is_empty() => {
                hits.truncate(self.settings.max_candidates);
                debug!("{} candidates for {:?}", hits.len(), ticket.query);
                self.candidates = hits;
                self.phase = LookupPhase::ResultsShown;
                true
            }
            Ok(_) => {
                self.candidates.clear();
                self.phase = LookupPhase::NoResults;
                true
            }
            Err(e) => {
                warn!("Title search for {:?} failed: {}", ticket.query, e);
                if self.phase == LookupPhase::Searching {
                    self.phase = self.phase_before_search;
                }
                false
            }
        }
    }

    /// Pick a candidate: the title is taken at once, details follow via the ticket
    pub fn select(&mut self, index: usize) -> Option<DetailTicket> {
        let candidate = self.candidates.get(index)?;
        self.draft.title = candidate.title.clone();
        let external_id = candidate.external_id.clone();

        self.phase = LookupPhase::Idle;
        self.detail_seq += 1;
        self.detail_pending = true;
        Some(DetailTicket {
            seq: self.detail_seq,
            external_id,
        })
    }

    /// Apply a detail outcome. Returns true when the draft was patched.
    pub fn finish_details(&mut self, ticket: DetailTicket, result: Result<Option<TitleDetails>, LookupError>) -> bool {
        if self.settings.discard_stale_responses && ticket.seq != self.detail_seq {
            debug!(
                "Discarding stale details for {} (seq {}, latest {})",
                ticket.external_id, ticket.seq, self.detail_seq
            );
            return false;
        }
        if ticket.seq == self.detail_seq {
            self.detail_pending = false;
        }

        match result {
            Ok(Some(details)) => {
                merge_details(&mut self.draft, &details);
                true
            }
            Ok(None) => {
                debug!("No details for {}", ticket.external_id);
                false
            }
            Err(e) => {
                warn!("Fetching details for {} failed: {}", ticket.external_id, e);
                false
            }
        }
    }

    /// Interaction outside the candidate list closes it; nothing else changes
    pub fn dismiss(&mut self) {
        self.phase = LookupPhase::Idle;
    }

    /// Focus returned to the title field: reopen the list if candidates are held
    pub fn refocus(&mut self) {
        if self.phase == LookupPhase::Idle && !self.candidates.is_empty() {
            self.phase = LookupPhase::ResultsShown;
        }
    }

    /// Title edit plus the search it triggers, awaited in place
    pub async fn search<I>(&mut self, index: &I, text: &str) -> LookupPhase
    where
        I: TitleIndex + ?Sized,
    {
        if let Some(ticket) = self.title_input(text) {
            let result = index.search(&ticket.query).await;
            self.finish_search(ticket, result);
        }
        self.phase
    }

    /// Selection plus its detail fetch. Returns true when the draft was patched.
    pub async fn choose<I>(&mut self, index: &I, candidate: usize) -> bool
    where
        I: TitleIndex + ?Sized,
    {
        let Some(ticket) = self.select(candidate) else {
            return false;
        };
        let result = index.details(&ticket.external_id).await;
        self.finish_details(ticket, result)
    }
}

/// Copy fetched values into the draft, keeping the draft's value wherever the
/// fetched one is missing or the sentinel
///
/// Only title, director, genre, poster and rating are ever written.
pub fn merge_details(draft: &mut MovieDraft, details: &TitleDetails) {
    if let Some(title) = present(&details.title) {
        draft.title = title;
    }
    if let Some(director) = present(&details.director) {
        draft.director = Some(director);
    }
    if let Some(genre) = present(&details.genre) {
        draft.genre = Some(genre);
    }
    if let Some(poster) = present(&details.poster_url) {
        draft.image_url = Some(poster);
    }
    if let Some(rating) = present(&details.rating_value) {
        draft.rating = Some(rating);
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| is_present(Some(v))).map(str::to_string)
}

#[cfg(test)]
mod tests;
