use super::{prompts, AppContext};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviemate_sources::StoreError;
use serde_json::json;

pub async fn run_delete(ctx: &AppContext, id: &str, yes: bool, output: &Output) -> Result<()> {
    let mut library = ctx.library()?;

    if !yes && !prompts::prompt_yes_no("Are you sure you want to delete this movie?", Some(false))? {
        output.info("Cancelled.");
        return Ok(());
    }

    match library.delete(id).await {
        Ok(()) => {}
        Err(StoreError::NotFound(_)) => return Err(eyre!("No movie with id {}", id)),
        Err(e) => {
            output.error("Failed to delete the movie. Please try again.");
            return Err(eyre!("Delete of movie {} failed: {}", id, e));
        }
    }

    if output.is_human() {
        output.success(format!("Deleted movie {}", id));
        if library.cache().is_loaded() {
            output.info(format!("{} movies remain", library.cache().records().len()));
        }
    } else {
        output.json(&json!({
            "deleted": id,
            "remaining": library.cache().is_loaded().then(|| library.cache().records().len()),
        }));
    }
    Ok(())
}
