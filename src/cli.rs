//! Command-line interface for the API sandbox.
//!
//! The same pipeline the web page drives is available from the terminal:
//! fetch metadata, generate example queries, execute a query and
//! pretty-print the response.
//!
//! # Commands
//!
//! - `serve`: Run the sandbox web server (demo page + JSON endpoints)
//! - `examples`: Generate example queries for an API (one-time)
//! - `query`: Execute a query path and pretty-print the result
//!
//! # Example
//!
//! ```bash
//! # Run the demo server
//! api-sandbox serve --port 8080
//!
//! # Generate example queries against a local pending API
//! api-sandbox examples mygene
//!
//! # Execute one of them
//! api-sandbox query mygene "/query?q=symbol:BRCA1"
//! ```

use crate::app_state::AppState;
use crate::config::Config;
use crate::error::{SandboxError, SandboxResult};
use crate::metadata::Metadata;
use crate::suggest;
use crate::upstream::UpstreamClient;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use tracing::{info, warn};

/// API sandbox for pending JSON APIs
#[derive(Parser, Debug)]
#[command(name = "api-sandbox")]
#[command(about = "Try a pending JSON API: metadata, example queries, formatted results", long_about = None)]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the sandbox web server (demo page + JSON endpoints)
    Serve {
        /// Port to listen on (default: from PORT env var or 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate example queries for an API (one-time)
    Examples {
        /// API identifier on the upstream host (e.g., mygene)
        api: String,

        /// Number of random document picks (default: from EXAMPLE_PICKS env var or 8)
        #[arg(short, long)]
        count: Option<u32>,

        /// RNG seed for a reproducible example list
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Execute a query path and pretty-print the result
    Query {
        /// API identifier on the upstream host (e.g., mygene)
        api: String,

        /// Query path, e.g. "/query?q=symbol:BRCA1" or "/gene/1017"
        path: String,
    },
}

/// Parse CLI arguments and execute the appropriate command.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration loading fails
/// - The upstream request fails
/// - Command execution fails
pub async fn run() -> SandboxResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Create the upstream client
    let upstream = UpstreamClient::new(
        config.upstream_url(),
        Duration::from_secs(config.request_timeout_secs()),
    )?;

    match cli.command {
        Commands::Serve { port } => run_serve_command(config, upstream, port).await,
        Commands::Examples { api, count, seed } => {
            run_examples_command(&config, &upstream, &api, count, seed).await
        }
        Commands::Query { api, path } => run_query_command(&upstream, &api, &path).await,
    }
}

/// Execute the serve command (web server).
async fn run_serve_command(
    config: Config,
    upstream: UpstreamClient,
    port: Option<u16>,
) -> SandboxResult<()> {
    let port = port.unwrap_or_else(|| config.port());
    let rate_limit_rpm = config.rate_limit_rpm();
    let cors_origins = config.cors_origins().to_vec();

    info!(port, upstream = %upstream.base(), "Starting sandbox server");
    println!(
        "{} {}",
        "🚀 Sandbox server on port".cyan().bold(),
        port.to_string().yellow()
    );
    println!(
        "{} {}",
        "   Upstream API host:".dimmed(),
        upstream.base().blue()
    );

    let state = AppState::new(config, upstream);

    crate::api::server::run_server(state, port, rate_limit_rpm, cors_origins)
        .await
        .map_err(|e| SandboxError::upstream(format!("sandbox server failed: {e}"), None))
}

/// Execute the examples command (one-time generation).
async fn run_examples_command(
    config: &Config,
    upstream: &UpstreamClient,
    api: &str,
    count: Option<u32>,
    seed: Option<u64>,
) -> SandboxResult<()> {
    let count = count.unwrap_or_else(|| config.example_picks());

    info!(api, count, "Generating example queries");

    // Fetch metadata; an unknown API is a terminal "not found" state
    let Some(metadata) = upstream.fetch_metadata(api).await? else {
        println!(
            "{} {}",
            "❌ API not found on upstream host:".red().bold(),
            api.yellow()
        );
        return Ok(());
    };

    let entity_type = metadata.entity_type().to_string();
    let total_documents = metadata.total_documents();

    print_metadata_summary(api, &metadata);

    // Very large corpora are not scanned; show curated examples instead
    if suggest::should_use_static_examples(total_documents) {
        warn!(total_documents, "Corpus too large to scan, using static examples");

        let examples = metadata.static_examples();
        if examples.is_empty() {
            println!(
                "{}",
                "No curated examples declared for this API.".yellow().bold()
            );
            return Ok(());
        }

        print_examples(examples, true);
        return Ok(());
    }

    // Fetch one page of sample documents
    let hits = upstream
        .fetch_samples(api, 0, config.sample_page_size())
        .await?;

    if hits.is_empty() {
        println!(
            "{}",
            "No sample documents returned, cannot generate examples."
                .yellow()
                .bold()
        );
        return Ok(());
    }

    info!(sampled = hits.len(), "Sample documents fetched");

    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let examples = suggest::generate(&hits, &entity_type, count, &mut rng);

    print_examples(&examples, false);

    Ok(())
}

/// Execute the query command (one round trip, pretty-printed).
async fn run_query_command(
    upstream: &UpstreamClient,
    api: &str,
    path: &str,
) -> SandboxResult<()> {
    if !path.starts_with('/') {
        return Err(SandboxError::sampler(
            "query path must start with '/' (e.g. /query?q=symbol:BRCA1)",
            None,
        ));
    }

    info!(api, path, "Executing query");

    let outcome = upstream.run_query(api, path).await?;

    // Success and error bodies render identically; only the flag differs
    let flag = if outcome.ok {
        format!("✅ {}", outcome.status).green().bold()
    } else {
        format!("⚠️  {}", outcome.status).red().bold()
    };
    println!("{} {}{}", flag, api.blue(), path.blue());

    let rendered = serde_json::to_string_pretty(&outcome.body)?;
    println!("{rendered}");

    Ok(())
}

/// Display a metadata summary with colored formatting.
fn print_metadata_summary(api: &str, metadata: &Metadata) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    println!(
        "{} {} API: {} | Type: {} | Documents: {}",
        "📊".cyan(),
        timestamp.to_string().dimmed(),
        api.yellow(),
        metadata.entity_type().blue(),
        format_count(metadata.total_documents()).magenta()
    );

    for (name, source) in &metadata.src {
        let version = source.version.as_deref().unwrap_or("unknown");
        let documents: u64 = source.stats.values().sum();
        println!(
            "   {} {} (version: {}, documents: {})",
            "•".dimmed(),
            name,
            version.dimmed(),
            format_count(documents).dimmed()
        );
    }
}

/// Display a generated or curated example list.
fn print_examples(examples: &[String], from_static: bool) {
    let heading = if from_static {
        "Curated example queries:"
    } else {
        "Generated example queries:"
    };
    println!();
    println!("{}", heading.cyan().bold());

    for example in examples {
        println!("   {}", example.green());
    }
}

/// Format a document count with thousands separators.
fn format_count(count: u64) -> String {
    let digits: Vec<char> = count.to_string().chars().rev().collect();
    let mut out = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out.chars().rev().collect()
}
