//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a command
//! needs before it runs:
//! - Logger (plain or JSON)
//! - HTTP client (User-Agent)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
