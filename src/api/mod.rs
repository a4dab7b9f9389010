//! HTTP API module serving the demo page and its JSON endpoints.

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
