use super::{display, AppContext};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use moviemate_core::{LookupAssist, LookupPhase};
use serde_json::json;
use std::time::Duration;

pub async fn run_search(ctx: &AppContext, query: &str, output: &Output) -> Result<()> {
    let index = ctx
        .title_index()
        .ok_or_else(|| eyre!("OMDb lookups are disabled. Set omdb.enabled = true in {}", ctx.config_file.display()))?;
    if !index.has_api_key() {
        return Err(eyre!("No OMDb API key configured. Run 'moviemate config set-api-key' first."));
    }

    let settings = ctx.lookup_settings();
    let min_chars = settings.min_query_chars;
    let mut assist = LookupAssist::new(settings);

    let spinner = spinner(output, "Searching...");
    let phase = assist.search(&index, query).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if !output.is_human() {
        output.json(&json!({
            "query": query.trim(),
            "results": assist.candidates(),
        }));
        return Ok(());
    }

    match phase {
        LookupPhase::ResultsShown => {
            output.println(display::candidate_table(assist.candidates()).to_string());
        }
        LookupPhase::NoResults => output.info(format!("No titles found for \"{}\".", query.trim())),
        LookupPhase::Idle if query.trim().chars().count() < min_chars => {
            output.warn(format!("Type at least {} characters to search.", min_chars));
        }
        // Failures are logged by the lookup and otherwise leave nothing to show
        LookupPhase::Idle | LookupPhase::Searching => output.info("No suggestions available."),
    }
    Ok(())
}

/// Spinner for a network wait, only in interactive human mode
pub fn spinner(output: &Output, message: &'static str) -> Option<ProgressBar> {
    if !output.is_human() || output.is_quiet() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}
