use super::search::spinner;
use super::{prompts, AppContext, MovieFields};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviemate_core::{LookupAssist, LookupPhase};
use moviemate_sources::{OmdbClient, StoreError};
use serde_json::json;

pub async fn run_add(ctx: &AppContext, fields: MovieFields, no_input: bool, autofill: bool, output: &Output) -> Result<()> {
    let mut library = ctx.library()?;
    // Without an API key the client still works; lookups just return nothing
    let index = ctx.title_index();

    let mut assist = LookupAssist::new(ctx.lookup_settings());
    fields.apply_to(assist.draft_mut());

    if no_input {
        if autofill {
            match &index {
                Some(index) => autofill_first_match(&mut assist, index, output).await,
                None => output.warn("OMDb lookups are disabled; adding without autofill."),
            }
        }
    } else {
        lookup_title(&mut assist, index.as_ref(), output).await?;
        prompts::prompt_movie_fields(assist.draft_mut(), false)?;
    }

    let mut draft = assist.into_draft();
    draft.title = draft.title.trim().to_string();
    if draft.title.is_empty() {
        return Err(eyre!("A title is required (use --title)"));
    }

    let created = library.create(&draft).await.map_err(|e| match e {
        StoreError::Validation(detail) => eyre!("The store rejected the movie: {}", detail),
        other => eyre!("Failed to add the movie. Please try again. ({})", other),
    })?;

    if output.is_human() {
        output.success(format!("Added \"{}\" (id {})", created.title, created.id));
    } else {
        output.json(&json!({ "movie": created }));
    }
    Ok(())
}

/// Title prompt with suggestions, repeated until the user settles on a title
async fn lookup_title(assist: &mut LookupAssist, index: Option<&OmdbClient>, output: &Output) -> Result<()> {
    loop {
        let current = assist.draft().title.clone();
        let default = (!current.trim().is_empty()).then_some(current.as_str());
        let text = prompts::prompt_string("Title", default)?;

        let Some(index) = index else {
            assist.draft_mut().title = text;
            if assist.draft().title.trim().is_empty() {
                eprintln!("A title is required.");
                continue;
            }
            return Ok(());
        };

        let pb = spinner(output, "Searching...");
        let phase = assist.search(index, &text).await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        match phase {
            LookupPhase::ResultsShown => {
                let candidates = assist.candidates().len();
                let mut items: Vec<String> = assist.candidates().iter().map(|c| c.display_label()).collect();
                items.push("Keep what I typed".to_string());
                items.push("Search again".to_string());

                match prompts::prompt_select("Pick a match", &items, 0)? {
                    Some(i) if i < candidates => {
                        let pb = spinner(output, "Fetching details...");
                        let patched = assist.choose(index, i).await;
                        if let Some(pb) = pb {
                            pb.finish_and_clear();
                        }
                        if patched {
                            output.success(format!("Filled in details for \"{}\"", assist.draft().title));
                        }
                        return Ok(());
                    }
                    Some(i) if i == candidates + 1 => continue,
                    _ => {
                        assist.dismiss();
                    }
                }
            }
            LookupPhase::NoResults => output.info("No matches found on OMDb."),
            LookupPhase::Idle | LookupPhase::Searching => {}
        }

        if !assist.draft().title.trim().is_empty() {
            return Ok(());
        }
        eprintln!("A title is required.");
    }
}

/// Non-interactive autofill: take the first candidate for the given title
async fn autofill_first_match(assist: &mut LookupAssist, index: &OmdbClient, output: &Output) {
    let title = assist.draft().title.clone();
    if assist.search(index, &title).await != LookupPhase::ResultsShown {
        output.info(format!("No OMDb match for \"{}\"; adding as given.", title.trim()));
        return;
    }
    if assist.choose(index, 0).await {
        output.info(format!("Autofilled from OMDb as \"{}\"", assist.draft().title));
    }
}
