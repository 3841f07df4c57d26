use moviemate_models::{SearchHit, TitleDetails};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;

// OMDb API base URL
pub const API_BASE: &str = "https://www.omdbapi.com/";

/// `Response` value OMDb uses for a successful lookup
const RESPONSE_OK: &str = "True";

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl From<OmdbSearchItem> for SearchHit {
    fn from(item: OmdbSearchItem) -> Self {
        SearchHit {
            external_id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: item.poster,
        }
    }
}

fn parse_search(body: &str) -> Result<Vec<SearchHit>, serde_json::Error> {
    let data: OmdbSearchResponse = serde_json::from_str(body)?;
    if data.response != RESPONSE_OK {
        debug!("OMDb search returned no result: {}", data.error.unwrap_or_default());
        return Ok(Vec::new());
    }
    Ok(data.search.into_iter().map(SearchHit::from).collect())
}

fn parse_details(body: &str) -> Result<Option<TitleDetails>, serde_json::Error> {
    let data: OmdbDetailResponse = serde_json::from_str(body)?;
    if data.response != RESPONSE_OK {
        debug!("OMDb detail returned no result: {}", data.error.unwrap_or_default());
        return Ok(None);
    }
    Ok(Some(TitleDetails {
        title: data.title,
        director: data.director,
        genre: data.genre,
        poster_url: data.poster,
        rating_value: data.imdb_rating,
    }))
}

async fn get_body(client: &Client, base_url: &str, params: &[(&str, &str)]) -> Result<String, LookupError> {
    let response = client.get(base_url).query(params).send().await?;

    if !response.status().is_success() {
        return Err(LookupError::Status {
            status: response.status().as_u16(),
        });
    }

    Ok(response.text().await?)
}

/// Keyword search (`?s=`)
pub async fn search_titles(
    client: &Client,
    base_url: &str,
    api_key: &str,
    query: &str,
) -> Result<Vec<SearchHit>, LookupError> {
    debug!("OMDb search for {:?}", query);
    let body = get_body(client, base_url, &[("s", query), ("apikey", api_key)]).await?;
    parse_search(&body).map_err(LookupError::Parse)
}

/// Detail lookup by IMDb id (`?i=`)
pub async fn get_title_details(
    client: &Client,
    base_url: &str,
    api_key: &str,
    imdb_id: &str,
) -> Result<Option<TitleDetails>, LookupError> {
    debug!("OMDb details for {}", imdb_id);
    let body = get_body(client, base_url, &[("i", imdb_id), ("apikey", api_key)]).await?;
    parse_details(&body).map_err(LookupError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_keeps_api_order() {
        let body = r#"{
            "Search": [
                {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie", "Poster": "https://img/alien.jpg"},
                {"Title": "Aliens", "Year": "1986", "imdbID": "tt0090605", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;
        let hits = parse_search(body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].external_id, "tt0078748");
        assert_eq!(hits[1].title, "Aliens");
        assert_eq!(hits[1].poster(), None);
    }

    #[test]
    fn test_parse_search_false_response_is_empty() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        assert!(parse_search(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_details_keeps_sentinels() {
        let body = r#"{
            "Title": "Alien",
            "Director": "N/A",
            "Genre": "Horror, Sci-Fi",
            "Poster": "https://img/alien.jpg",
            "imdbRating": "8.5",
            "Response": "True"
        }"#;
        let details = parse_details(body).unwrap().unwrap();
        assert_eq!(details.director.as_deref(), Some("N/A"));
        assert_eq!(details.genre.as_deref(), Some("Horror, Sci-Fi"));
        assert_eq!(details.rating_value.as_deref(), Some("8.5"));
    }

    #[test]
    fn test_parse_details_false_response_is_none() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        assert!(parse_details(body).unwrap().is_none());
    }
}
