//! Dogstats Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared logging setup for the dogstats workspace: `tracing`-based
//! initialization with console and daily-rotated file output, configured
//! from the environment.

pub mod logging;

// Re-export the pieces every binary needs at startup
pub use logging::{init_logging, LogConfig, LogLevel};
