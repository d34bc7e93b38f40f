//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct. `Config` can
//! be built programmatically without clap; the CLI converts into it.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    CACHE_MAX_AGE, DATA_TIMEOUT_SECS, DEFAULT_CACHE_FILE, DEFAULT_DATA_URL, DEFAULT_GEOCODER_URL,
    DEFAULT_USER_AGENT, GEOCODER_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable venue cards
    Text,
    /// Pretty-printed JSON records
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use fishfry_finder::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_source: "./fishfrymap.geojson".to_string(),
///     cache_file: PathBuf::from("/tmp/fishfry.geojson"),
///     geocoder_url: None,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Command output format
    pub output_format: OutputFormat,

    /// Dataset URL (`http://` or `https://`) or local file path
    pub data_source: String,

    /// Local cache file mirroring the last successful fetch
    pub cache_file: PathBuf,

    /// Cache entries older than this are refetched
    pub cache_max_age: Duration,

    /// Nominatim-compatible geocoder base URL (None disables external geocoding)
    pub geocoder_url: Option<String>,

    /// Never touch the network: cached data and the built-in location table only
    pub offline: bool,

    /// Dataset request timeout in seconds
    pub timeout_seconds: u64,

    /// Geocoder request timeout in seconds
    pub geocoder_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Config {
    /// Returns the dataset request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Returns the geocoder request timeout.
    pub fn geocoder_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoder_timeout_seconds)
    }

    /// Returns the geocoder URL if external geocoding is usable.
    pub fn active_geocoder_url(&self) -> Option<&str> {
        if self.offline {
            return None;
        }
        self.geocoder_url.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Text,
            data_source: DEFAULT_DATA_URL.to_string(),
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            cache_max_age: CACHE_MAX_AGE,
            geocoder_url: Some(DEFAULT_GEOCODER_URL.to_string()),
            offline: false,
            timeout_seconds: DATA_TIMEOUT_SECS,
            geocoder_timeout_seconds: GEOCODER_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
