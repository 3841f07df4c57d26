use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Kind of a one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    fn marker(self) -> Option<String> {
        match self {
            Level::Success => Some("✓".green().to_string()),
            Level::Warning => Some("⚠".yellow().to_string()),
            Level::Error => Some("✗".red().to_string()),
            Level::Info => None,
        }
    }
}

/// Where command results go: colored text for people, JSON lines for scripts
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message(Level::Success, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message(Level::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message(Level::Warning, msg.as_ref());
    }

    /// Shown even with `--quiet`
    pub fn error(&self, msg: impl AsRef<str>) {
        self.message(Level::Error, msg.as_ref());
    }

    /// Raw text in human mode; nothing in JSON modes
    pub fn println(&self, msg: impl AsRef<str>) {
        if self.quiet || !self.is_human() {
            return;
        }
        println!("{}", msg.as_ref());
    }

    /// Structured payload; JSON modes only
    pub fn json(&self, data: &serde_json::Value) {
        if let Some(line) = self.render_json(data) {
            println!("{}", line);
        }
    }

    fn message(&self, level: Level, msg: &str) {
        if self.quiet && level != Level::Error {
            return;
        }

        if !self.is_human() {
            self.json(&json!({ "type": level.as_str(), "message": msg }));
            return;
        }

        let line = match level.marker() {
            Some(marker) => format!("{} {}", marker, msg),
            None => msg.to_string(),
        };
        if level == Level::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn render_json(&self, data: &serde_json::Value) -> Option<String> {
        match self.format {
            OutputFormat::Human => None,
            OutputFormat::Json => serde_json::to_string(data).ok(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(data).ok(),
        }
    }
}
