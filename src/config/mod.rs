//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (data source, cache, timeouts, limits)
//! - The library `Config` struct and option enums
//! - CLI argument types and their conversion into `Config`

mod cli;
mod constants;
mod types;

// Re-export public API
pub use cli::{Cli, Command, FeatureArgs};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
