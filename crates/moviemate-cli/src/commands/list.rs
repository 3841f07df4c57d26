use super::{display, AppContext};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviemate_core::FilterCriteria;
use moviemate_models::{FilterField, WatchStatus};
use serde_json::json;

pub async fn run_list(
    ctx: &AppContext,
    genre: Option<String>,
    platform: Option<String>,
    status: Option<WatchStatus>,
    output: &Output,
) -> Result<()> {
    let mut library = ctx.library()?;
    library
        .load()
        .await
        .map_err(|e| eyre!("Failed to load movies from {}: {}", library.store().base_url(), e))?;

    library.set_criteria(
        FilterCriteria::new()
            .with_genre(genre.as_deref().map(str::trim))
            .with_platform(platform.as_deref())
            .with_status(status),
    );

    let visible = library.visible();
    let total = library.cache().records().len();

    if !output.is_human() {
        output.json(&json!({
            "total": total,
            "shown": visible.len(),
            "movies": visible,
        }));
        return Ok(());
    }

    if visible.is_empty() {
        if total == 0 {
            output.info("No movies tracked yet. Add one with 'moviemate add'.");
        } else {
            output.info(format!("No movies match the current filters ({} tracked).", total));
        }
        return Ok(());
    }

    output.println(display::movie_table(&visible).to_string());
    if library.criteria().is_empty() {
        output.info(format!("{} movies", total));
    } else {
        output.info(format!("Showing {} of {} movies", visible.len(), total));
    }
    Ok(())
}

pub async fn run_options(ctx: &AppContext, field: FilterField, output: &Output) -> Result<()> {
    let mut library = ctx.library()?;
    library
        .load()
        .await
        .map_err(|e| eyre!("Failed to load movies from {}: {}", library.store().base_url(), e))?;

    let values = library.options(field);

    if !output.is_human() {
        output.json(&json!({
            "field": field.as_str(),
            "options": values,
        }));
        return Ok(());
    }

    if values.is_empty() {
        output.info(format!("No {} values in the list yet.", field));
        return Ok(());
    }
    for value in &values {
        output.println(value);
    }
    Ok(())
}
