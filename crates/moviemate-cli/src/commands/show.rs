use super::{display, AppContext};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviemate_sources::StoreError;
use serde_json::json;

pub async fn run_show(ctx: &AppContext, id: &str, full: bool, output: &Output) -> Result<()> {
    let library = ctx.library()?;

    // Details always come fresh from the store, never from a cached list
    let record = match library.get(id).await {
        Ok(record) => record,
        Err(StoreError::NotFound(_)) => return Err(eyre!("No movie with id {}", id)),
        Err(e) => return Err(eyre!("Failed to load movie {}: {}", id, e)),
    };

    if !output.is_human() {
        output.json(&json!({
            "movie": record,
            "progress_percent": record.progress_percent(),
        }));
        return Ok(());
    }

    output.println(display::movie_card(&record, full));
    if !full && record.review.as_deref().is_some_and(|r| r.chars().count() > display::REVIEW_PREVIEW_CHARS) {
        output.info("Review shortened; pass --full to read all of it.");
    }
    Ok(())
}
