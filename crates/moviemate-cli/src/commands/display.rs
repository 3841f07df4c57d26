use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use moviemate_models::{MovieRecord, SearchHit, WatchStatus};
use owo_colors::OwoColorize;

/// Placeholder for absent text fields
const NOT_AVAILABLE: &str = "N/A";
/// Reviews longer than this are cut in the detail view unless `--full` is given
pub const REVIEW_PREVIEW_CHARS: usize = 300;
const PROGRESS_WIDTH: usize = 20;

pub fn movie_table(records: &[&MovieRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("Platform").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
        Cell::new("Progress").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
    ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.title),
            Cell::new(or_na(&record.genre)),
            Cell::new(or_na(&record.platform)),
            Cell::new(record.status.label()).fg(status_color(record.status)),
            Cell::new(format!(
                "{}/{} ({}%)",
                record.watched_episodes,
                record.total_episodes,
                record.progress_percent()
            )),
            Cell::new(or_na(&record.rating)),
        ]);
    }
    table
}

/// Detail card for `show`
pub fn movie_card(record: &MovieRecord, full_review: bool) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(&record.title).fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(format!("#{}", record.id)),
    ]);

    let review = match &record.review {
        Some(review) if full_review => review.clone(),
        Some(review) => preview(review, REVIEW_PREVIEW_CHARS),
        None => NOT_AVAILABLE.to_string(),
    };

    table.add_row(vec![Cell::new("Director"), Cell::new(or_na(&record.director))]);
    table.add_row(vec![Cell::new("Genre"), Cell::new(or_na(&record.genre))]);
    table.add_row(vec![Cell::new("Platform"), Cell::new(or_na(&record.platform))]);
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(record.status.label()).fg(status_color(record.status)),
    ]);
    table.add_row(vec![
        Cell::new("Progress"),
        Cell::new(format!(
            "{} {}% ({}/{} episodes)",
            progress_bar(record.progress_percent()),
            record.progress_percent(),
            record.watched_episodes,
            record.total_episodes
        )),
    ]);
    table.add_row(vec![Cell::new("Rating"), Cell::new(or_na(&record.rating))]);
    table.add_row(vec![Cell::new("Review"), Cell::new(review)]);
    table.add_row(vec![Cell::new("Poster"), Cell::new(or_na(&record.image_url))]);
    table.to_string()
}

pub fn candidate_table(hits: &[SearchHit]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("IMDb ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new("Poster").add_attribute(Attribute::Bold),
    ]);
    for hit in hits {
        table.add_row(vec![
            Cell::new(&hit.external_id),
            Cell::new(&hit.title),
            Cell::new(hit.year.as_deref().unwrap_or(NOT_AVAILABLE)),
            Cell::new(if hit.poster().is_some() { "✓".green().to_string() } else { "✗".red().to_string() }),
        ]);
    }
    table
}

pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_WIDTH / 100;
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(PROGRESS_WIDTH - filled).bright_black()
    )
}

/// First `max_chars` characters followed by an ellipsis, or the text unchanged
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn status_color(status: WatchStatus) -> Color {
    match status {
        WatchStatus::Watching => Color::Yellow,
        WatchStatus::Completed => Color::Green,
        WatchStatus::Wishlist => Color::Cyan,
        WatchStatus::Dropped => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(preview("short", 300), "short");
    }

    #[test]
    fn test_preview_cuts_on_char_boundary() {
        let text = "é".repeat(310);
        let cut = preview(&text, REVIEW_PREVIEW_CHARS);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), REVIEW_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_card_falls_back_for_missing_fields() {
        let record = moviemate_models::MovieDraft::new("Dune").into_record("7");
        let card = movie_card(&record, false);
        assert!(card.contains("Dune"));
        assert!(card.contains("#7"));
        assert!(card.contains(NOT_AVAILABLE));
        assert!(card.contains("Wishlist"));
    }
}
