//! Lodestone main entry point
//!
//! This is the command-line interface for the Lodestone query-anchored
//! web crawler.

use std::time::Duration;

use clap::Parser;
use lodestone::config::{
    validate, CrawlConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_ITERATION_LIMIT,
};
use lodestone::crawler::crawl;
use lodestone::output::{print_report, CrawlReport};
use lodestone::relevance::DedupMode;
use tracing_subscriber::EnvFilter;

/// Lodestone: a query-anchored web crawler
///
/// Lodestone starts from a seed page, follows hyperlinks outward, and
/// collects pages relevant to a query phrase into a ranked result list
/// with contextual snippets.
#[derive(Parser, Debug)]
#[command(name = "lodestone")]
#[command(version = "0.1.0")]
#[command(about = "A query-anchored web crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(short, long, value_name = "URL")]
    url: String,

    /// Query phrase to search for (multiple words are joined into one phrase)
    #[arg(short, long, value_name = "QUERY", num_args = 1.., required = true)]
    query: Vec<String>,

    /// Maximum number of result pages to collect
    #[arg(short, long, value_name = "N")]
    max_results: usize,

    /// Budget on candidate page visits across the whole crawl
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ITERATION_LIMIT)]
    iteration_limit: u32,

    /// Per-request fetch timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Detect duplicate bodies by content hash instead of the legacy length rule
    #[arg(long)]
    content_hash_dedup: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let phrase = cli.query.join(" ");
    let mut config = CrawlConfig::new(&cli.url, &phrase, cli.max_results);
    config.iteration_limit = cli.iteration_limit;
    config.fetch_timeout = Duration::from_secs(cli.timeout);
    if cli.content_hash_dedup {
        config.dedup_mode = DedupMode::ContentHash;
    }

    if let Err(e) = validate(&config) {
        tracing::error!("Invalid arguments: {}", e);
        return Err(e.into());
    }

    // Run the crawler
    let outcome = match crawl(&config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let report = CrawlReport::new(outcome, &config.phrase, &config.seed_url);
    print_report(&report);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("lodestone=info,warn"),
            1 => EnvFilter::new("lodestone=debug,info"),
            2 => EnvFilter::new("lodestone=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
