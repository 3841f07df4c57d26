use clap::Args;
use moviemate_models::{MovieDraft, WatchStatus};

/// Record fields accepted as flags by `add` and `edit`
#[derive(Args, Debug, Default, Clone)]
pub struct MovieFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub director: Option<String>,

    /// Comma separated, e.g. "Sci-Fi, Drama"
    #[arg(long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub platform: Option<String>,

    /// watching, completed, wishlist or dropped
    #[arg(long)]
    pub status: Option<WatchStatus>,

    #[arg(long)]
    pub total_episodes: Option<u32>,

    #[arg(long)]
    pub watched_episodes: Option<u32>,

    #[arg(long)]
    pub rating: Option<String>,

    #[arg(long)]
    pub review: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,
}

impl MovieFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.genre.is_none()
            && self.platform.is_none()
            && self.status.is_none()
            && self.total_episodes.is_none()
            && self.watched_episodes.is_none()
            && self.rating.is_none()
            && self.review.is_none()
            && self.image_url.is_none()
    }

    /// Overwrite the draft with every flag that was given. An empty string
    /// clears an optional field.
    pub fn apply_to(&self, draft: &mut MovieDraft) {
        if let Some(title) = &self.title {
            draft.title = title.trim().to_string();
        }
        set_text(&mut draft.director, &self.director);
        set_text(&mut draft.genre, &self.genre);
        set_text(&mut draft.platform, &self.platform);
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(total) = self.total_episodes {
            draft.total_episodes = total;
        }
        if let Some(watched) = self.watched_episodes {
            draft.watched_episodes = watched;
        }
        set_text(&mut draft.rating, &self.rating);
        set_text(&mut draft.review, &self.review);
        set_text(&mut draft.image_url, &self.image_url);
    }
}

fn set_text(slot: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        *slot = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_given_flags_are_applied() {
        let mut draft = MovieDraft::new("Dune");
        draft.director = Some("Villeneuve".to_string());

        let fields = MovieFields {
            platform: Some("Netflix".to_string()),
            status: Some(WatchStatus::Watching),
            watched_episodes: Some(3),
            ..Default::default()
        };
        fields.apply_to(&mut draft);

        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.director.as_deref(), Some("Villeneuve"));
        assert_eq!(draft.platform.as_deref(), Some("Netflix"));
        assert_eq!(draft.status, WatchStatus::Watching);
        assert_eq!(draft.watched_episodes, 3);
        assert_eq!(draft.total_episodes, 1);
    }

    #[test]
    fn test_empty_flag_clears_optional_field() {
        let mut draft = MovieDraft::new("Dune");
        draft.review = Some("Great".to_string());

        let fields = MovieFields {
            review: Some("  ".to_string()),
            ..Default::default()
        };
        fields.apply_to(&mut draft);
        assert_eq!(draft.review, None);
    }

    #[test]
    fn test_is_empty() {
        assert!(MovieFields::default().is_empty());
        let fields = MovieFields {
            rating: Some("8".to_string()),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }
}
