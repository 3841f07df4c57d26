use serde::{Deserialize, Serialize};

/// Value the external index uses for "no data" in any field
pub const MISSING_SENTINEL: &str = "N/A";

/// True when an external field carries real data
pub fn is_present(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.trim().is_empty() && v != MISSING_SENTINEL)
}

/// One candidate from a title search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub external_id: String,
    pub title: String,
    pub year: Option<String>,
    /// Raw poster value, may be the sentinel
    pub poster_url: Option<String>,
}

impl SearchHit {
    pub fn poster(&self) -> Option<&str> {
        self.poster_url.as_deref().filter(|p| is_present(Some(p)))
    }

    /// "Title (Year)" as shown in the candidate list
    pub fn display_label(&self) -> String {
        match self.year.as_deref() {
            Some(year) if is_present(Some(year)) => format!("{} ({})", self.title, year),
            _ => self.title.clone(),
        }
    }
}

/// Detail record for one external title, fields kept raw (sentinels included)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleDetails {
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub poster_url: Option<String>,
    pub rating_value: Option<String>,
}
