//! prospector CLI
//!
//! Searches for professional profiles, prints them, and optionally exports
//! them to JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use prospector::{
    error::Result,
    models::{Config, SessionState},
    pipeline::{Exporter, Normalizer, ProfileFilter, ResultsView},
    services::{Dispatcher, HttpSearchProvider, MIN_QUERY_LEN, Submission},
    utils::display,
};

/// prospector - Professional Profile Search
#[derive(Parser, Debug)]
#[command(
    name = "prospector",
    version,
    about = "Find professional profiles through a web search provider"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for profiles matching a free-text query
    Search {
        /// Query text (e.g., "Software Engineer in San Francisco")
        query: Option<String>,

        /// Save results to the export file
        #[arg(short, long)]
        export: bool,

        /// Directory for the export file (default: export.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate,

    /// List suggested searches
    Suggest,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load(&cli.config);
    init_logging(cli.verbose, &Config::log_level_of(&loaded));
    let config = Config::or_default(&cli.config, loaded);

    match cli.command {
        Command::Search {
            query,
            export,
            output,
        } => {
            let query = query.unwrap_or_default();
            if query.trim().chars().count() < MIN_QUERY_LEN {
                print_suggestions(&config);
                return Ok(());
            }
            run_search(&config, &query, export, output).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            Normalizer::from_config(&config.profile, &config.display)?;

            display::success("Config OK");
            display::sub_item(&format!("Endpoint: {}", config.provider.endpoint));
            display::sub_item(&format!(
                "Profile pattern: {}",
                config.profile.url_pattern()
            ));
            display::sub_item(&format!(
                "Suffix patterns: {}",
                config.profile.strip_suffixes.len()
            ));
            display::sub_item(&format!("Date locale: {}", config.display.locale));
            display::sub_item(&format!("Export file: {}", config.export.file_name));
        }

        Command::Suggest => print_suggestions(&config),
    }

    Ok(())
}

async fn run_search(
    config: &Config,
    query: &str,
    export: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    config.validate()?;
    let filter = ProfileFilter::from_config(&config.profile);
    let normalizer = Normalizer::from_config(&config.profile, &config.display)?;
    let provider = HttpSearchProvider::new(config.provider.clone())?;
    let dispatcher = Dispatcher::new(Arc::new(provider));

    display::header(&format!("Searching profiles: {}", query.trim()));
    if dispatcher.submit(query).await == Submission::Skipped {
        return Ok(());
    }

    let state = dispatcher.state();
    let view = ResultsView::derive(&state, &filter, &normalizer);
    match &view {
        ResultsView::Failed(message) => {
            display::failure(message);
            return view.check();
        }
        ResultsView::NoMatches => {
            display::failure("No profiles found. Try different search terms.");
        }
        ResultsView::Profiles(records) => {
            display::profiles(records, &config.profile.path_segment);
        }
        ResultsView::Idle | ResultsView::Loading => {}
    }

    let hit_count = match &state {
        SessionState::Success { hits, .. } => hits.len(),
        _ => 0,
    };
    display::summary(
        "Search",
        &[
            ("Query", query.trim().to_string()),
            ("Provider results", hit_count.to_string()),
            ("Profiles", view.records().len().to_string()),
        ],
    );

    if export {
        if view.records().is_empty() {
            log::warn!("Nothing to export");
            return Ok(());
        }
        let artifact = Exporter::from_config(&config.export).export(view.records())?;
        let dir = output.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
        let path = artifact.save(&dir).await?;
        display::success(&format!(
            "Exported {} profiles to {}",
            view.records().len(),
            path.display()
        ));
    }

    Ok(())
}

fn print_suggestions(config: &Config) {
    display::header("Suggested searches");
    for suggestion in &config.suggestions {
        display::sub_item(suggestion);
    }
    display::sub_item("Run: prospector search \"<query>\"");
}
