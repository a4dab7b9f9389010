//! CLI entry point for the API sandbox.
//!
//! # Architecture Flow
//!
//! This binary delegates to the CLI module, which orchestrates all layers:
//!
//! ```text
//! main.rs (Runtime Initialization)
//!     ↓
//! CLI Layer (src/cli.rs)
//!     ↓
//! 1. Config Layer (src/config.rs)      → Load environment variables
//! 2. Upstream Layer (src/upstream.rs)  → Fetch metadata & sample documents
//! 3. Metadata Layer (src/metadata.rs)  → Derive doc count & entity type
//! 4. Sampler Layer (src/sampler.rs)    → Render query fragments
//! 5. Suggest Layer (src/suggest.rs)    → Build the example-query list
//! 6. CLI/API Layer (output)            → Display or serve results
//! ```
//!
//! # Layer Separation
//!
//! - **main.rs**: Async runtime + tracing initialization only
//! - **CLI module**: User interface + layer orchestration
//! - **Core modules**: Independent, reusable, no upward dependencies
//!
//! All errors bubble up with context via `SandboxResult<T>`.

use api_sandbox::{cli, observability};
use tracing::error;

/// Entry point for the API sandbox.
///
/// Initializes:
/// - Tokio async runtime (via `#[tokio::main]`)
/// - Structured logging with tracing
/// - Environment-based filtering (RUST_LOG, LOG_JSON, LOG_FILE)
///
/// Then delegates to the CLI module for all business logic.
#[tokio::main]
async fn main() {
    // Initialize structured logging FIRST (before any other operations)
    // Configuration can be controlled via environment variables:
    // - RUST_LOG: Set log level (e.g., "debug", "info", "trace")
    // - LOG_JSON: Enable JSON output for production ("true" or "false")
    // - LOG_FILE: Write logs to file with daily rotation
    //
    // Examples:
    //   RUST_LOG=debug cargo run -- serve
    //   RUST_LOG=api_sandbox=trace,reqwest=warn cargo run
    //   LOG_JSON=true LOG_FILE=./logs/sandbox.log cargo run
    let log_level = std::env::var("RUST_LOG").ok();
    let log_file = std::env::var("LOG_FILE").ok().map(std::path::PathBuf::from);
    let json_output = std::env::var("LOG_JSON")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    // The guard keeps the non-blocking file writer alive for the whole run
    let _guard = match observability::init_tracing(log_level, log_file, json_output) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {e}");
            std::process::exit(1);
        }
    };

    // Run CLI - all layer orchestration happens inside cli::run()
    if let Err(e) = cli::run().await {
        error!(error = %e, "Application error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
