use super::{prompts, AppContext};
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use moviemate_config::{Config, OMDB_API_KEY_ENV};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_config(mut ctx: AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(&ctx, full, output),
        ConfigCommands::Init { force } => init_config(&ctx, force, output),
        ConfigCommands::SetApiKey { key } => set_api_key(&mut ctx, key, output),
        ConfigCommands::ClearApiKey => clear_api_key(&mut ctx, output),
        ConfigCommands::SetStoreUrl { url } => set_store_url(&mut ctx, url, output),
    }
}

fn show_config(ctx: &AppContext, full: bool, output: &Output) -> Result<()> {
    let config = &ctx.config;
    let api_key = ctx.credentials.resolve_omdb_api_key();
    let key_display = match &api_key {
        Some(key) if full => key.clone(),
        Some(key) => mask_string(key),
        None => "not set".to_string(),
    };

    if !output.is_human() {
        output.json(&json!({
            "config_file": ctx.config_file.display().to_string(),
            "config_dir": ctx.paths.config_dir().display().to_string(),
            "store": {
                "base_url": config.store.base_url,
                "timeout_secs": config.store.timeout_secs,
            },
            "omdb": {
                "enabled": config.omdb.enabled,
                "base_url": config.omdb.base_url,
                "api_key": api_key.map(|_| key_display),
            },
            "lookup": {
                "min_query_chars": config.lookup.min_query_chars,
                "max_candidates": config.lookup.max_candidates,
                "discard_stale_responses": config.lookup.discard_stale_responses,
            },
        }));
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }
    if !ctx.config_file.exists() {
        output.warn(format!(
            "No config file at {}; showing defaults. Run 'moviemate config init' to create one.",
            ctx.config_file.display()
        ));
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config file"), Cell::new(ctx.config_file.display())]);
    table.add_row(vec![Cell::new("Store URL"), Cell::new(&config.store.base_url)]);
    table.add_row(vec![
        Cell::new("Store timeout"),
        Cell::new(
            config
                .store
                .timeout_secs
                .map(|s| format!("{}s", s))
                .unwrap_or_else(|| "none".to_string()),
        ),
    ]);
    table.add_row(vec![
        Cell::new("OMDb lookups"),
        Cell::new(if config.omdb.enabled { "✓".green().to_string() } else { "✗".red().to_string() }),
    ]);
    table.add_row(vec![Cell::new("OMDb URL"), Cell::new(&config.omdb.base_url)]);
    table.add_row(vec![Cell::new("OMDb API key"), Cell::new(key_display)]);
    table.add_row(vec![
        Cell::new("Minimum query length"),
        Cell::new(config.lookup.min_query_chars),
    ]);
    table.add_row(vec![Cell::new("Max suggestions"), Cell::new(config.lookup.max_candidates)]);
    table.add_row(vec![
        Cell::new("Discard stale responses"),
        Cell::new(config.lookup.discard_stale_responses),
    ]);
    println!("{}", table);

    if std::env::var(OMDB_API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        output.info(format!("The API key comes from {}.", OMDB_API_KEY_ENV));
    }
    Ok(())
}

fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    if ctx.config_file.exists() && !force {
        output.warn(format!(
            "Config already exists at {}. Pass --force to overwrite it.",
            ctx.config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", ctx.paths.config_dir().display(), e))?;
    Config::default()
        .save_to_file(&ctx.config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", ctx.config_file.display(), e))?;

    output.success(format!("Wrote default config to {}", ctx.config_file.display()));
    Ok(())
}

fn set_api_key(ctx: &mut AppContext, key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => prompts::prompt_password("OMDb API key")?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("The API key cannot be empty"));
    }

    ctx.credentials.set_omdb_api_key(key);
    ctx.credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success("Saved OMDb API key");
    if std::env::var(OMDB_API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        output.warn(format!("{} is set and takes precedence over the saved key.", OMDB_API_KEY_ENV));
    }
    Ok(())
}

fn clear_api_key(ctx: &mut AppContext, output: &Output) -> Result<()> {
    if ctx.credentials.get_omdb_api_key().is_none() {
        output.info("No OMDb API key is stored.");
        return Ok(());
    }

    ctx.credentials.clear_omdb_api_key();
    ctx.credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success("Removed OMDb API key");
    Ok(())
}

fn set_store_url(ctx: &mut AppContext, url: String, output: &Output) -> Result<()> {
    ctx.config.store.base_url = url.trim().to_string();
    ctx.config
        .validate()
        .map_err(|e| eyre!("Not saved: {}", e))?;
    ctx.config
        .save_to_file(&ctx.config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", ctx.config_file.display(), e))?;

    output.success(format!("Movie store set to {}", ctx.config.store.base_url));
    Ok(())
}

/// Mask a secret, showing the first and last 4 characters
fn mask_string(s: &str) -> String {
    let count = s.chars().count();
    if count <= 8 {
        return "*".repeat(count);
    }
    let head: String = s.chars().take(4).collect();
    let tail: String = s.chars().skip(count - 4).collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("abc"), "***");
        assert_eq!(mask_string("0123456789ab"), "0123...89ab");
    }
}
