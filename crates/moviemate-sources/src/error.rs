use thiserror::Error;

/// Failures surfaced by the remote movie store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure or a body that did not parse
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("movie not found: {0}")]
    NotFound(String),

    /// The store rejected the payload; carries the response body
    #[error("rejected by store: {0}")]
    Validation(String),

    /// Any other non-success response
    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Failures of the external title index
///
/// Callers in the lookup flow log these and carry on without suggestions.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unreadable lookup response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no API key configured for title lookup")]
    MissingApiKey,

    #[error("lookup service returned {status}")]
    Status { status: u16 },
}
