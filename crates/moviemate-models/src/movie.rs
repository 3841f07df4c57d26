use serde::{Deserialize, Serialize};

use crate::de;
use crate::status::WatchStatus;

/// A tracked movie or show as stored by the remote store
///
/// Every optional text field may be absent on the wire; blank strings read as
/// `None`. Nothing here is validated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Assigned by the store, never changes
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub director: Option<String>,
    /// Comma separated free-text tags, stored as typed
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "de::status")]
    pub status: WatchStatus,
    #[serde(default, deserialize_with = "de::count")]
    pub total_episodes: u32,
    #[serde(default, deserialize_with = "de::count")]
    pub watched_episodes: u32,
    #[serde(default, deserialize_with = "de::optional_numeric_text", serialize_with = "de::empty_if_none")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub review: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub image_url: Option<String>,
}

/// A record that has not been submitted yet (no id)
///
/// Used both for the create form and as the full replacement payload on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "de::status")]
    pub status: WatchStatus,
    #[serde(default, deserialize_with = "de::count")]
    pub total_episodes: u32,
    #[serde(default, deserialize_with = "de::count")]
    pub watched_episodes: u32,
    #[serde(default, deserialize_with = "de::optional_numeric_text", serialize_with = "de::empty_if_none")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub review: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text", serialize_with = "de::empty_if_none")]
    pub image_url: Option<String>,
}

impl Default for MovieDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            director: None,
            genre: None,
            platform: None,
            status: WatchStatus::Wishlist,
            total_episodes: 1,
            watched_episodes: 0,
            rating: None,
            review: None,
            image_url: None,
        }
    }
}

impl MovieDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Attach the store-assigned id
    pub fn into_record(self, id: impl Into<String>) -> MovieRecord {
        MovieRecord {
            id: id.into(),
            title: self.title,
            director: self.director,
            genre: self.genre,
            platform: self.platform,
            status: self.status,
            total_episodes: self.total_episodes,
            watched_episodes: self.watched_episodes,
            rating: self.rating,
            review: self.review,
            image_url: self.image_url,
        }
    }
}

impl MovieRecord {
    /// Editable copy of this record, used as the whole-record update payload
    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            director: self.director.clone(),
            genre: self.genre.clone(),
            platform: self.platform.clone(),
            status: self.status,
            total_episodes: self.total_episodes,
            watched_episodes: self.watched_episodes,
            rating: self.rating.clone(),
            review: self.review.clone(),
            image_url: self.image_url.clone(),
        }
    }

    /// Watched share of all episodes, rounded and clamped to 0..=100
    ///
    /// Nothing stops `watched_episodes` exceeding `total_episodes`, so the
    /// clamp matters.
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.watched_episodes, self.total_episodes)
    }

    /// Individual genre tags, trimmed, blanks dropped. Casing is left as stored.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .into_iter()
            .flat_map(|g| g.split(','))
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

pub fn progress_percent(watched: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (f64::from(watched) / f64::from(total) * 100.0).round();
    percent.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let record: MovieRecord = serde_json::from_str(r#"{"id": 3, "title": "Alien"}"#).unwrap();
        assert_eq!(record.id, "3");
        assert_eq!(record.director, None);
        assert_eq!(record.genre, None);
        assert_eq!(record.status, WatchStatus::Wishlist);
        assert_eq!(record.total_episodes, 0);
    }

    #[test]
    fn test_record_reads_store_payload() {
        let json = r#"{
            "id": 12,
            "title": "Dark",
            "director": "Baran bo Odar",
            "genre": "Sci-Fi, Thriller",
            "platform": "Netflix",
            "status": "watching",
            "total_episodes": 26,
            "watched_episodes": 10,
            "rating": "8.7",
            "review": "",
            "image_url": null
        }"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, WatchStatus::Watching);
        assert_eq!(record.rating.as_deref(), Some("8.7"));
        assert_eq!(record.review, None);
        assert_eq!(record.image_url, None);
        assert_eq!(record.genres().collect::<Vec<_>>(), vec!["Sci-Fi", "Thriller"]);
    }

    #[test]
    fn test_one_odd_status_does_not_fail_the_list() {
        let json = r#"[
            {"id": 1, "title": "Alien", "status": "completed"},
            {"id": 2, "title": "Dark", "status": "Watching"},
            {"id": 3, "title": "Heat", "status": null},
            {"id": 4, "title": "Dune", "status": ""}
        ]"#;
        let records: Vec<MovieRecord> = serde_json::from_str(json).unwrap();
        let statuses: Vec<_> = records.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                WatchStatus::Completed,
                WatchStatus::Watching,
                WatchStatus::Wishlist,
                WatchStatus::Wishlist
            ]
        );
    }

    #[test]
    fn test_draft_serializes_blank_fields_as_empty_strings() {
        let draft = MovieDraft::new("Heat");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["title"], "Heat");
        assert_eq!(value["director"], "");
        assert_eq!(value["status"], "wishlist");
        assert_eq!(value["total_episodes"], 1);
        assert_eq!(value["watched_episodes"], 0);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_progress_percent_is_clamped() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(5, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(10, 10), 100);
        assert_eq!(progress_percent(15, 10), 100);
    }

    #[test]
    fn test_draft_record_conversion_keeps_fields() {
        let mut draft = MovieDraft::new("Severance");
        draft.platform = Some("Apple TV+".to_string());
        draft.total_episodes = 9;
        let record = draft.clone().into_record("42");
        assert_eq!(record.id, "42");
        assert_eq!(record.to_draft(), draft);
    }
}
