use moviemate_models::{MovieDraft, MovieRecord};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::error::StoreError;

/// Default collection endpoint of the movie store
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/movies/";

/// Collection URL with exactly one trailing slash; every route hangs off it
pub fn collection_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

pub fn item_url(base_url: &str, id: &str) -> String {
    format!("{}{}/", collection_url(base_url), urlencoding::encode(id))
}

pub fn create_url(base_url: &str) -> String {
    format!("{}add/", collection_url(base_url))
}

pub fn update_url(base_url: &str, id: &str) -> String {
    format!("{}update/", item_url(base_url, id))
}

pub fn delete_url(base_url: &str, id: &str) -> String {
    format!("{}delete/", item_url(base_url, id))
}

/// Map non-success responses onto the store error taxonomy
async fn check_response(response: Response, id: Option<&str>) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => Err(StoreError::NotFound(id.unwrap_or("collection").to_string())),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Err(StoreError::Validation(body)),
        _ => Err(StoreError::Status {
            status: status.as_u16(),
            body,
        }),
    }
}

pub async fn list_movies(client: &Client, base_url: &str) -> Result<Vec<MovieRecord>, StoreError> {
    let url = collection_url(base_url);
    debug!("GET {}", url);

    let response = client.get(&url).header("Accept", "application/json").send().await?;
    let response = check_response(response, None).await?;
    Ok(response.json().await?)
}

pub async fn get_movie(client: &Client, base_url: &str, id: &str) -> Result<MovieRecord, StoreError> {
    let url = item_url(base_url, id);
    debug!("GET {}", url);

    let response = client.get(&url).header("Accept", "application/json").send().await?;
    let response = check_response(response, Some(id)).await?;
    Ok(response.json().await?)
}

pub async fn create_movie(client: &Client, base_url: &str, draft: &MovieDraft) -> Result<MovieRecord, StoreError> {
    let url = create_url(base_url);
    debug!("POST {} title={:?}", url, draft.title);

    let response = client.post(&url).json(draft).send().await?;
    let response = check_response(response, None).await?;
    Ok(response.json().await?)
}

pub async fn update_movie(
    client: &Client,
    base_url: &str,
    id: &str,
    record: &MovieDraft,
) -> Result<MovieRecord, StoreError> {
    let url = update_url(base_url, id);
    debug!("PUT {}", url);

    let response = client.put(&url).json(record).send().await?;
    let response = check_response(response, Some(id)).await?;
    Ok(response.json().await?)
}

pub async fn delete_movie(client: &Client, base_url: &str, id: &str) -> Result<(), StoreError> {
    let url = delete_url(base_url, id);
    debug!("DELETE {}", url);

    let response = client.delete(&url).send().await?;
    check_response(response, Some(id)).await?;
    Ok(())
}
