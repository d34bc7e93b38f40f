//! Command-line interface.
//!
//! # Examples
//!
//! ```bash
//! # Nearest fish fries with homemade pierogies
//! fishfry search 15217 --pierogies
//!
//! # Everything in the dataset that serves alcohol and does takeout
//! fishfry list --alcohol --takeout
//!
//! # Who is frying this Friday
//! fishfry schedule friday
//!
//! # Work from the cached copy only
//! fishfry --offline list
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    CACHE_MAX_AGE, DATA_TIMEOUT_SECS, DEFAULT_CACHE_FILE, DEFAULT_DATA_URL, DEFAULT_GEOCODER_URL,
    DEFAULT_RESULT_LIMIT, DEFAULT_USER_AGENT, GEOCODER_TIMEOUT_SECS,
};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};
use crate::models::{Feature, VenueType};

#[derive(Debug, Parser)]
#[command(
    name = "fishfry",
    version,
    about = "Find Lenten fish fries in the Pittsburgh area.",
    long_about = "Find Lenten fish fries in the Pittsburgh area using the Code for Pittsburgh fish fry map."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Dataset URL or local GeoJSON path
    #[arg(long, env = "FISHFRY_DATA_SOURCE", default_value = DEFAULT_DATA_URL, global = true)]
    pub data_source: String,

    /// Cache file mirroring the last successful fetch
    #[arg(long, env = "FISHFRY_CACHE_FILE", default_value = DEFAULT_CACHE_FILE, global = true)]
    pub cache_file: PathBuf,

    /// Nominatim-compatible geocoder used for street addresses
    #[arg(long, env = "FISHFRY_GEOCODER_URL", default_value = DEFAULT_GEOCODER_URL, global = true)]
    pub geocoder_url: String,

    /// Resolve locations with the built-in zip/neighborhood table only
    #[arg(long, global = true)]
    pub no_geocoder: bool,

    /// Use cached data only and never touch the network
    #[arg(long, global = true)]
    pub offline: bool,

    /// Dataset request timeout in seconds
    #[arg(long, default_value_t = DATA_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for fish fries near a location (zip, neighborhood, or address)
    Search {
        /// Location (zip, neighborhood, or address)
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,

        #[command(flatten)]
        features: FeatureArgs,

        /// Max results
        #[arg(long, short = 'n', default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,

        /// Only show venues within this many miles
        #[arg(long, value_parser = parse_radius)]
        radius: Option<f64>,
    },

    /// List all fish fries
    List {
        #[command(flatten)]
        features: FeatureArgs,

        /// Only venues whose name contains this text
        #[arg(long)]
        name: Option<String>,

        /// Only venues of this type (church, fire-department, restaurant, ...)
        #[arg(long = "type")]
        venue_type: Option<VenueType>,
    },

    /// Get venue details (partial, case-insensitive name match)
    Details {
        /// Venue name
        #[arg(required = true, num_args = 1..)]
        venue_name: Vec<String>,
    },

    /// Show fish fries on a date (today, tomorrow, a weekday, or YYYY-MM-DD)
    Schedule {
        /// Day to show; defaults to the upcoming Friday
        day: Option<String>,
    },

    /// Refresh the local data cache
    Update,
}

/// Feature filters shared by `search` and `list` (combined with logical AND).
#[derive(Debug, Clone, Default, Args)]
pub struct FeatureArgs {
    /// Has homemade pierogies
    #[arg(long)]
    pub pierogies: bool,

    /// Wheelchair accessible
    #[arg(long)]
    pub accessible: bool,

    /// Serves alcohol
    #[arg(long)]
    pub alcohol: bool,

    /// Has takeout
    #[arg(long)]
    pub takeout: bool,

    /// Serves lunch
    #[arg(long)]
    pub lunch: bool,
}

impl FeatureArgs {
    /// Requested features in display order.
    pub fn features(&self) -> Vec<Feature> {
        [
            (self.pierogies, Feature::Pierogies),
            (self.accessible, Feature::Accessible),
            (self.alcohol, Feature::Alcohol),
            (self.takeout, Feature::Takeout),
            (self.lunch, Feature::Lunch),
        ]
        .into_iter()
        .filter_map(|(requested, feature)| requested.then_some(feature))
        .collect()
    }
}

/// Parses `--radius`: a finite number of miles greater than zero.
fn parse_radius(value: &str) -> Result<f64, String> {
    let radius: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(format!("radius must be a positive number of miles, got '{value}'"))
    }
}

impl Cli {
    /// Builds the library configuration from global options.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            output_format: self.format,
            data_source: self.data_source.clone(),
            cache_file: self.cache_file.clone(),
            cache_max_age: CACHE_MAX_AGE,
            geocoder_url: (!self.no_geocoder).then(|| self.geocoder_url.clone()),
            offline: self.offline,
            timeout_seconds: self.timeout_seconds,
            geocoder_timeout_seconds: GEOCODER_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
