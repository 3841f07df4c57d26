pub mod de;
pub mod filter_field;
pub mod lookup;
pub mod movie;
pub mod status;

pub use filter_field::FilterField;
pub use lookup::{SearchHit, TitleDetails, MISSING_SENTINEL};
pub use movie::{MovieDraft, MovieRecord};
pub use status::WatchStatus;

/// Error returned when a user-supplied name does not map to a known value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
