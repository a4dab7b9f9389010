//! Middleware for the sandbox API: error mapping, logging, rate limiting.

pub mod error;
pub mod logging;
pub mod rate_limit;
