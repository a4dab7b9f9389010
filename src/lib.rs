//! # API Sandbox
//!
//! Interactive sandbox for trying out pending JSON APIs: fetch an API's
//! metadata, synthesize example queries from live sample documents, and
//! display query results in a formatted viewer.
//!
//! ## Features
//!
//! - **Query sampling** with type-appropriate rendering of nested JSON
//! - **Example-query generation** with dedup and a direct-lookup example
//! - **Static-example fallback** for corpora too large to scan
//! - **Web demo page** plus JSON endpoints (Axum + Swagger UI)
//! - **Seedable randomness** for deterministic tests
//! - **Full async/await** support with Tokio
//!
//! ## Architecture
//!
//! The crate is organized into independent layers:
//!
//! 1. **Config Layer** ([`config`]) - Environment variable loading
//! 2. **Upstream Layer** ([`upstream`]) - HTTP client for the pending API
//! 3. **Metadata Layer** ([`metadata`]) - API metadata model and derivations
//! 4. **Sampler Layer** ([`sampler`]) - Query fragment rendering
//! 5. **Suggest Layer** ([`suggest`]) - Example-query list assembly
//! 6. **API Layer** ([`api`]) - Axum server for the demo page
//!
//! ## Quick Start
//!
//! ### Using the CLI
//!
//! ```bash
//! # Run the demo server
//! cargo run --release -- serve
//!
//! # Generate example queries for an API
//! cargo run --release -- examples mygene
//! ```
//!
//! ### Using as a Library
//!
//! ```rust,no_run
//! use api_sandbox::{config::Config, suggest, upstream::UpstreamClient};
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = Config::from_env()?;
//!
//!     // Create the upstream client
//!     let upstream = UpstreamClient::new(
//!         config.upstream_url(),
//!         Duration::from_secs(config.request_timeout_secs()),
//!     )?;
//!
//!     // Fetch sample documents and generate example queries
//!     let hits = upstream.fetch_samples("mygene", 0, 10).await?;
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let examples = suggest::generate(&hits, "gene", 8, &mut rng);
//!
//!     for example in examples {
//!         println!("{example}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Setup
//!
//! Point the sandbox at the upstream API host (defaults to localhost):
//!
//! ```text
//! UPSTREAM_URL=https://pending.example.org
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`error::SandboxResult<T>`](error::SandboxResult) for
//! consistent error propagation:
//!
//! ```rust
//! use api_sandbox::error::{SandboxError, SandboxResult};
//!
//! fn example() -> SandboxResult<()> {
//!     // Operations that can fail return SandboxResult
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! Run the test suite:
//!
//! ```bash
//! # All tests
//! cargo test
//!
//! # Unit tests only
//! cargo test --lib
//!
//! # Integration tests
//! cargo test --test '*'
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! - MIT license (<http://opensource.org/licenses/MIT>)
//! - Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//!
//! at your option.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod observability;
pub mod sampler;
pub mod suggest;
pub mod upstream;
