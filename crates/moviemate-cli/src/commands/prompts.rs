use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::{Confirm, Input, Password, Select};
use moviemate_models::{MovieDraft, WatchStatus};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact_text()
        .map_err(|e| eyre!("Failed to read input: {}", e))
}

/// Like [`prompt_string`], but blank input means "no value"
pub fn prompt_optional(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let value = prompt_string(prompt, default)?;
    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Prompt for a secret (masked input)
pub fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| eyre!("Failed to read password: {}", e))
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| eyre!("Failed to read confirmation: {}", e))
}

/// Prompt for a non-negative number, re-asking until the input parses
pub fn prompt_number(prompt: &str, default: u32) -> Result<u32> {
    loop {
        let input_str = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| eyre!("Failed to read input: {}", e))?;

        match input_str.trim().parse::<u32>() {
            Ok(num) => return Ok(num),
            Err(_) => eprintln!("Invalid input. Please enter a valid number."),
        }
    }
}

/// Pick one entry; `None` when the user escapes out
pub fn prompt_select(prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(|e| eyre!("Failed to read selection: {}", e))
}

pub fn prompt_status(current: WatchStatus) -> Result<WatchStatus> {
    let labels: Vec<String> = WatchStatus::ALL.iter().map(|s| s.label().to_string()).collect();
    let default = WatchStatus::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let picked = prompt_select("Status", &labels, default)?;
    Ok(picked.map(|i| WatchStatus::ALL[i]).unwrap_or(current))
}

/// Walk through every editable field, offering the draft's current values as defaults
pub fn prompt_movie_fields(draft: &mut MovieDraft, include_title: bool) -> Result<()> {
    if include_title {
        loop {
            let title = prompt_string("Title", non_empty(&draft.title))?;
            if !title.trim().is_empty() {
                draft.title = title.trim().to_string();
                break;
            }
            eprintln!("A title is required.");
        }
    }
    draft.director = prompt_optional("Director", draft.director.as_deref())?;
    draft.genre = prompt_optional("Genre (comma separated)", draft.genre.as_deref())?;
    draft.platform = prompt_optional("Platform", draft.platform.as_deref())?;
    draft.status = prompt_status(draft.status)?;
    draft.total_episodes = prompt_number("Total episodes", draft.total_episodes)?;
    draft.watched_episodes = prompt_number("Watched episodes", draft.watched_episodes)?;
    draft.rating = prompt_optional("Rating", draft.rating.as_deref())?;
    draft.review = prompt_optional("Review", draft.review.as_deref())?;
    draft.image_url = prompt_optional("Poster URL", draft.image_url.as_deref())?;
    Ok(())
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}
