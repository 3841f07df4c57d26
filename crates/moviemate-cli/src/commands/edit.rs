use super::{prompts, AppContext, MovieFields};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviemate_sources::StoreError;
use serde_json::json;

pub async fn run_edit(ctx: &AppContext, id: &str, fields: MovieFields, no_input: bool, output: &Output) -> Result<()> {
    let mut library = ctx.library()?;

    let current = match library.get(id).await {
        Ok(record) => record,
        Err(StoreError::NotFound(_)) => return Err(eyre!("No movie with id {}", id)),
        Err(e) => return Err(eyre!("Failed to load movie {}: {}", id, e)),
    };

    // Update replaces the whole record, so start from what the store has now
    let mut draft = current.to_draft();
    fields.apply_to(&mut draft);
    if !no_input && fields.is_empty() {
        prompts::prompt_movie_fields(&mut draft, true)?;
    }

    if draft == current.to_draft() {
        output.info("Nothing to change.");
        return Ok(());
    }
    if draft.title.trim().is_empty() {
        return Err(eyre!("A title is required"));
    }

    let updated = library.update(id, &draft).await.map_err(|e| match e {
        StoreError::NotFound(_) => eyre!("No movie with id {}", id),
        StoreError::Validation(detail) => eyre!("The store rejected the update: {}", detail),
        other => eyre!("Failed to update the movie. Please try again. ({})", other),
    })?;

    if output.is_human() {
        output.success(format!("Updated \"{}\"", updated.title));
    } else {
        output.json(&json!({ "movie": updated }));
    }
    Ok(())
}
