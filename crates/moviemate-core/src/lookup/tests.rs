use super::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

fn hit(id: &str, title: &str) -> SearchHit {
    SearchHit {
        external_id: id.to_string(),
        title: title.to_string(),
        year: Some("1979".to_string()),
        poster_url: Some("N/A".to_string()),
    }
}

fn hits(n: usize) -> Vec<SearchHit> {
    (0..n).map(|i| hit(&format!("tt{:07}", i), &format!("Alien {}", i))).collect()
}

/// Index returning canned results and counting calls
#[derive(Default)]
struct FakeIndex {
    results: Vec<SearchHit>,
    details: Option<TitleDetails>,
    fail: bool,
    search_calls: AtomicU32,
    detail_calls: AtomicU32,
    queries: Mutex<Vec<String>>,
}

#[async_trait]
impl TitleIndex for FakeIndex {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(LookupError::Status { status: 500 });
        }
        Ok(self.results.clone())
    }

    async fn details(&self, _external_id: &str) -> Result<Option<TitleDetails>, LookupError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LookupError::MissingApiKey);
        }
        Ok(self.details.clone())
    }
}

fn assist() -> LookupAssist {
    LookupAssist::new(LookupSettings::default())
}

#[tokio::test]
async fn test_single_character_never_searches() {
    let index = FakeIndex {
        results: hits(3),
        ..FakeIndex::default()
    };
    let mut lookup = assist();

    assert_eq!(lookup.search(&index, "A").await, LookupPhase::Idle);
    assert_eq!(lookup.search(&index, " A ").await, LookupPhase::Idle);
    assert_eq!(index.search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(lookup.draft().title, " A ");
}

#[tokio::test]
async fn test_two_characters_search_and_cap_candidates() {
    let index = FakeIndex {
        results: hits(10),
        ..FakeIndex::default()
    };
    let mut lookup = assist();

    assert_eq!(lookup.search(&index, "Al").await, LookupPhase::ResultsShown);
    assert_eq!(index.search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(lookup.candidates().len(), 6);
    assert_eq!(lookup.candidates()[0].external_id, "tt0000000");
    assert_eq!(lookup.candidates()[5].external_id, "tt0000005");
}

#[tokio::test]
async fn test_query_is_trimmed() {
    let index = FakeIndex::default();
    let mut lookup = assist();
    lookup.search(&index, "  dune ").await;
    assert_eq!(*index.queries.lock().unwrap(), vec!["dune".to_string()]);
}

#[tokio::test]
async fn test_empty_result_hides_list() {
    let index = FakeIndex::default();
    let mut lookup = assist();

    assert_eq!(lookup.search(&index, "zzzz").await, LookupPhase::NoResults);
    assert!(lookup.candidates().is_empty());
}

#[tokio::test]
async fn test_search_failure_is_swallowed_and_keeps_candidates() {
    let good = FakeIndex {
        results: hits(2),
        ..FakeIndex::default()
    };
    let broken = FakeIndex {
        fail: true,
        ..FakeIndex::default()
    };
    let mut lookup = assist();

    lookup.search(&good, "Ali").await;
    assert_eq!(lookup.search(&broken, "Alie").await, LookupPhase::ResultsShown);
    assert_eq!(lookup.candidates().len(), 2);
    assert_eq!(lookup.draft().title, "Alie");
}

#[test]
fn test_shortening_input_clears_candidates_mid_flight() {
    let mut lookup = assist();
    let first = lookup.title_input("Al").unwrap();
    lookup.finish_search(first, Ok(hits(3)));
    assert_eq!(lookup.phase(), LookupPhase::ResultsShown);

    let in_flight = lookup.title_input("Ali").unwrap();
    assert_eq!(lookup.phase(), LookupPhase::Searching);
    assert!(lookup.title_input("A").is_none());
    assert_eq!(lookup.phase(), LookupPhase::Idle);
    assert!(lookup.candidates().is_empty());

    // The late answer belongs to a superseded query
    assert!(!lookup.finish_search(in_flight, Ok(hits(3))));
    assert_eq!(lookup.phase(), LookupPhase::Idle);
    assert!(lookup.candidates().is_empty());
}

#[test]
fn test_out_of_order_search_responses_keep_latest() {
    let mut lookup = assist();
    let older = lookup.title_input("Al").unwrap();
    let newer = lookup.title_input("Alien").unwrap();
    assert!(newer.seq > older.seq);

    assert!(lookup.finish_search(newer, Ok(vec![hit("tt0078748", "Alien")])));
    assert!(!lookup.finish_search(older, Ok(hits(5))));
    assert_eq!(lookup.candidates().len(), 1);
    assert_eq!(lookup.candidates()[0].title, "Alien");
}

#[test]
fn test_stale_responses_apply_when_guard_is_off() {
    let settings = LookupSettings {
        discard_stale_responses: false,
        ..LookupSettings::default()
    };
    let mut lookup = LookupAssist::new(settings);
    let older = lookup.title_input("Al").unwrap();
    let newer = lookup.title_input("Alien").unwrap();

    lookup.finish_search(newer, Ok(vec![hit("tt0078748", "Alien")]));
    assert!(lookup.finish_search(older, Ok(hits(5))));
    assert_eq!(lookup.candidates().len(), 5);
}

#[test]
fn test_select_sets_title_and_closes_list() {
    let mut lookup = assist();
    let ticket = lookup.title_input("ali").unwrap();
    lookup.finish_search(ticket, Ok(vec![hit("tt0078748", "Alien"), hit("tt0090605", "Aliens")]));

    let detail = lookup.select(1).unwrap();
    assert_eq!(detail.external_id, "tt0090605");
    assert_eq!(lookup.draft().title, "Aliens");
    assert_eq!(lookup.phase(), LookupPhase::Idle);
    assert!(lookup.is_fetching_details());

    assert!(lookup.select(7).is_none());
}

#[test]
fn test_merge_keeps_existing_values_over_sentinels() {
    let mut draft = MovieDraft::new("Alien");
    draft.director = Some("X".to_string());

    merge_details(
        &mut draft,
        &TitleDetails {
            director: Some("N/A".to_string()),
            genre: Some("Sci-Fi".to_string()),
            ..TitleDetails::default()
        },
    );

    assert_eq!(draft.director.as_deref(), Some("X"));
    assert_eq!(draft.genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(draft.title, "Alien");
}

#[test]
fn test_merge_never_touches_user_owned_fields() {
    let mut draft = MovieDraft::new("alien");
    draft.platform = Some("Prime".to_string());
    draft.review = Some("classic".to_string());
    draft.total_episodes = 3;

    merge_details(
        &mut draft,
        &TitleDetails {
            title: Some("Alien".to_string()),
            director: Some("Ridley Scott".to_string()),
            genre: Some("Horror, Sci-Fi".to_string()),
            poster_url: Some("https://img/alien.jpg".to_string()),
            rating_value: Some("8.5".to_string()),
        },
    );

    assert_eq!(draft.title, "Alien");
    assert_eq!(draft.director.as_deref(), Some("Ridley Scott"));
    assert_eq!(draft.image_url.as_deref(), Some("https://img/alien.jpg"));
    assert_eq!(draft.rating.as_deref(), Some("8.5"));
    assert_eq!(draft.platform.as_deref(), Some("Prime"));
    assert_eq!(draft.review.as_deref(), Some("classic"));
    assert_eq!(draft.total_episodes, 3);
    assert_eq!(draft.status, moviemate_models::WatchStatus::Wishlist);
}

#[tokio::test]
async fn test_choose_fetches_details_and_patches_draft() {
    let index = FakeIndex {
        results: vec![hit("tt0078748", "Alien")],
        details: Some(TitleDetails {
            title: Some("Alien".to_string()),
            director: Some("Ridley Scott".to_string()),
            genre: Some("Horror, Sci-Fi".to_string()),
            poster_url: Some("N/A".to_string()),
            rating_value: Some("8.5".to_string()),
        }),
        ..FakeIndex::default()
    };
    let mut lookup = assist();
    lookup.draft_mut().image_url = Some("https://mine.jpg".to_string());

    lookup.search(&index, "alien").await;
    assert!(lookup.choose(&index, 0).await);

    assert_eq!(index.detail_calls.load(Ordering::SeqCst), 1);
    assert!(!lookup.is_fetching_details());
    let draft = lookup.into_draft();
    assert_eq!(draft.director.as_deref(), Some("Ridley Scott"));
    assert_eq!(draft.image_url.as_deref(), Some("https://mine.jpg"));
}

#[tokio::test]
async fn test_detail_failure_keeps_selected_title() {
    let good = FakeIndex {
        results: vec![hit("tt0078748", "Alien")],
        ..FakeIndex::default()
    };
    let broken = FakeIndex {
        fail: true,
        ..FakeIndex::default()
    };
    let mut lookup = assist();
    lookup.search(&good, "ali").await;

    assert!(!lookup.choose(&broken, 0).await);
    assert_eq!(lookup.draft().title, "Alien");
    assert_eq!(lookup.draft().director, None);
}

#[test]
fn test_stale_details_are_discarded() {
    let mut lookup = assist();
    let ticket = lookup.title_input("ali").unwrap();
    lookup.finish_search(ticket, Ok(vec![hit("tt1", "Alien"), hit("tt2", "Aliens")]));

    let first = lookup.select(0).unwrap();
    lookup.refocus();
    let second = lookup.select(1).unwrap();

    let details = |director: &str| -> Result<Option<TitleDetails>, LookupError> {
        Ok(Some(TitleDetails {
            director: Some(director.to_string()),
            ..TitleDetails::default()
        }))
    };
    assert!(lookup.finish_details(second, details("James Cameron")));
    assert!(!lookup.finish_details(first, details("Ridley Scott")));
    assert_eq!(lookup.draft().director.as_deref(), Some("James Cameron"));
}

#[test]
fn test_dismiss_and_refocus() {
    let mut lookup = assist();
    let ticket = lookup.title_input("ali").unwrap();
    lookup.finish_search(ticket, Ok(hits(2)));

    lookup.dismiss();
    assert_eq!(lookup.phase(), LookupPhase::Idle);
    assert_eq!(lookup.candidates().len(), 2);
    assert_eq!(lookup.draft().title, "ali");

    lookup.refocus();
    assert_eq!(lookup.phase(), LookupPhase::ResultsShown);

    // Dismissing a pending search does not cancel it
    let ticket = lookup.title_input("alie").unwrap();
    lookup.dismiss();
    assert_eq!(lookup.phase(), LookupPhase::Idle);
    assert!(lookup.finish_search(ticket, Ok(hits(1))));
}

#[test]
fn test_settings_follow_config() {
    let config = LookupConfig {
        min_query_chars: 3,
        max_candidates: 2,
        discard_stale_responses: false,
    };
    let mut lookup = LookupAssist::new(LookupSettings::from(&config));
    assert!(lookup.title_input("al").is_none());
    let ticket = lookup.title_input("ali").unwrap();
    lookup.finish_search(ticket, Ok(hits(5)));
    assert_eq!(lookup.candidates().len(), 2);
}
