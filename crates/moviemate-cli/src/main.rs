use clap::{ArgAction, Parser, Subcommand};
use commands::{add, config, delete, edit, list, search, show, AppContext, MovieFields};
use moviemate_config::PathManager;
use moviemate_models::{FilterField, WatchStatus};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "moviemate")]
#[command(about = "MovieMate - Track what you are watching, finished, dropped or want to see")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to a daily-rotated file instead of stderr (default: logs/moviemate.log in the config directory)
    #[arg(long, global = true, value_name = "PATH", require_equals = true)]
    log_file: Option<Option<PathBuf>>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tracked titles
    #[command(long_about = "List every tracked title, optionally narrowed by genre, platform and status. Genre matching ignores case and matches any of a title's comma separated genres; platform and status must match exactly.")]
    List {
        /// Only titles tagged with this genre
        #[arg(long)]
        genre: Option<String>,

        /// Only titles on this platform (exact match)
        #[arg(long)]
        platform: Option<String>,

        /// Only titles with this status
        #[arg(long)]
        status: Option<WatchStatus>,
    },
    /// Show the values available for a filter
    Options {
        /// genre, platform or status
        field: FilterField,
    },
    /// Show one title in detail
    Show {
        id: String,

        /// Print long reviews in full
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Add a title, with optional autofill from OMDb
    #[command(long_about = "Add a title. Interactively, typing a title of two or more characters searches OMDb and offers up to six matches; picking one fills in title, director, genre, poster and rating from OMDb and keeps your value only where OMDb has none.")]
    Add {
        #[command(flatten)]
        fields: MovieFields,

        /// Do not prompt; use the given flags only
        #[arg(long, action = ArgAction::SetTrue)]
        no_input: bool,

        /// With --no-input, autofill from the first OMDb match for --title
        #[arg(long, action = ArgAction::SetTrue, requires = "no_input")]
        autofill: bool,
    },
    /// Edit a title (whole-record update)
    Edit {
        id: String,

        #[command(flatten)]
        fields: MovieFields,

        /// Do not prompt; use the given flags only
        #[arg(long, action = ArgAction::SetTrue)]
        no_input: bool,
    },
    /// Delete a title
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Search OMDb without adding anything
    Search {
        query: String,
    },
    /// Show or change configuration
    #[command(long_about = "Manage the MovieMate configuration: the movie store URL, OMDb settings and the OMDb API key. Running without a subcommand shows the current configuration.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Store the OMDb API key in the credentials file
    SetApiKey {
        /// The key (prompted for when omitted)
        key: Option<String>,
    },
    /// Remove the stored OMDb API key
    ClearApiKey,
    /// Point MovieMate at a different movie store
    SetStoreUrl {
        url: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .map(|path| path.unwrap_or_else(|| PathManager::default().log_file()));
    logging::init_logging(cli.verbose, cli.quiet, log_file)?;

    let output = output::Output::new(cli.output, cli.quiet);
    let ctx = AppContext::load(cli.config.clone())?;

    match cli.command {
        Commands::List { genre, platform, status } => list::run_list(&ctx, genre, platform, status, &output).await,
        Commands::Options { field } => list::run_options(&ctx, field, &output).await,
        Commands::Show { id, full } => show::run_show(&ctx, &id, full, &output).await,
        Commands::Add { fields, no_input, autofill } => add::run_add(&ctx, fields, no_input, autofill, &output).await,
        Commands::Edit { id, fields, no_input } => edit::run_edit(&ctx, &id, fields, no_input, &output).await,
        Commands::Delete { id, yes } => delete::run_delete(&ctx, &id, yes, &output).await,
        Commands::Search { query } => search::run_search(&ctx, &query, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(ctx, cmd, &output).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_filters_parse() {
        let cli = Cli::try_parse_from(["moviemate", "list", "--genre", "drama", "--status", "Watching"]).unwrap();
        match cli.command {
            Commands::List { genre, platform, status } => {
                assert_eq!(genre.as_deref(), Some("drama"));
                assert_eq!(platform, None);
                assert_eq!(status, Some(WatchStatus::Watching));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(Cli::try_parse_from(["moviemate", "list", "--status", "finished"]).is_err());
    }

    #[test]
    fn test_add_help_describes_autofill_overwrite() {
        let cmd = Cli::command();
        let add = cmd.find_subcommand("add").unwrap();
        let help = add.get_long_about().unwrap().to_string();
        assert!(help.contains("keeps your value only where OMDb has none"));
    }

    #[test]
    fn test_log_file_value_is_optional() {
        let cli = Cli::try_parse_from(["moviemate", "--log-file", "list"]).unwrap();
        assert_eq!(cli.log_file, Some(None));
        let cli = Cli::try_parse_from(["moviemate", "--log-file=/tmp/mm.log", "list"]).unwrap();
        assert_eq!(cli.log_file, Some(Some(PathBuf::from("/tmp/mm.log"))));
        let cli = Cli::try_parse_from(["moviemate", "list"]).unwrap();
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_autofill_requires_no_input() {
        assert!(Cli::try_parse_from(["moviemate", "add", "--title", "Dune", "--autofill"]).is_err());
        assert!(Cli::try_parse_from(["moviemate", "add", "--title", "Dune", "--no-input", "--autofill"]).is_ok());
    }
}
