// Client-side filtering of the movie list and the option sets behind each filter

use moviemate_models::{FilterField, MovieRecord, ParseNameError, WatchStatus};
use std::collections::{BTreeSet, HashSet};

/// Selected filter values. `None` means "no constraint".
///
/// A plain value: build a new one per change and hand it to [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub status: Option<WatchStatus>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: Option<&str>) -> Self {
        self.genre = non_blank(genre);
        self
    }

    pub fn with_platform(mut self, platform: Option<&str>) -> Self {
        self.platform = non_blank(platform);
        self
    }

    pub fn with_status(mut self, status: Option<WatchStatus>) -> Self {
        self.status = status;
        self
    }

    /// Set one criterion from its textual form; empty text clears it
    pub fn with_field(self, field: FilterField, value: &str) -> Result<Self, ParseNameError> {
        Ok(match field {
            FilterField::Genre => self.with_genre(Some(value)),
            FilterField::Platform => self.with_platform(Some(value)),
            FilterField::Status if value.trim().is_empty() => self.with_status(None),
            FilterField::Status => self.with_status(Some(value.parse()?)),
        })
    }

    /// Criteria with every constraint cleared
    pub fn reset(&self) -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.platform.is_none() && self.status.is_none()
    }

    pub fn matches(&self, record: &MovieRecord) -> bool {
        self.genre_matches(record) && self.platform_matches(record) && self.status_matches(record)
    }

    /// Token match on the comma separated genre list, ignoring case
    fn genre_matches(&self, record: &MovieRecord) -> bool {
        let Some(wanted) = self.genre.as_deref() else {
            return true;
        };
        let wanted = wanted.to_lowercase();
        record.genres().any(|g| g.to_lowercase() == wanted)
    }

    /// Exact, case-sensitive
    fn platform_matches(&self, record: &MovieRecord) -> bool {
        match self.platform.as_deref() {
            None => true,
            Some(wanted) => record.platform.as_deref() == Some(wanted),
        }
    }

    fn status_matches(&self, record: &MovieRecord) -> bool {
        self.status.map_or(true, |wanted| record.status == wanted)
    }
}

/// Records passing every criterion, in their original order
pub fn apply<'a, I>(criteria: &FilterCriteria, records: I) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}

/// Distinct values offered for a filter, sorted
pub fn options_for<'a, I>(field: FilterField, records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    match field {
        FilterField::Genre => genre_options(records),
        FilterField::Platform => records
            .into_iter()
            .filter_map(|r| r.platform.as_deref())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        FilterField::Status => records
            .into_iter()
            .map(|r| r.status.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// First character upper-cased, the rest lower-cased ("sci-FI" -> "Sci-fi")
pub fn canonical_genre(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// One entry per case-insensitive genre, displayed in the canonical form of its
/// first occurrence
fn genre_options<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut seen = HashSet::new();
    let mut options = Vec::new();

    for genre in records.into_iter().flat_map(MovieRecord::genres) {
        if seen.insert(genre.to_lowercase()) {
            options.push(canonical_genre(genre));
        }
    }

    options.sort();
    options
}
