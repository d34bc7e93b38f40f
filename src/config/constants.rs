//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: data
//! source, cache location, freshness window, timeouts and result limits.

use std::time::Duration;

/// Code for Pittsburgh fish fry map dataset (GeoJSON FeatureCollection).
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/CodeForPittsburgh/fishfrymap/master/data/fishfrymap.geojson";

/// Local mirror of the last successful fetch.
pub const DEFAULT_CACHE_FILE: &str = ".fishfry_cache/fishfrymap.geojson";

/// Cache duration: 7 days
/// The dataset is refreshed by volunteers a few times per season.
pub const CACHE_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Nominatim (OpenStreetMap) search endpoint used for free-text addresses.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Dataset request timeout in seconds
pub const DATA_TIMEOUT_SECS: u64 = 30;

/// Geocoder request timeout in seconds
pub const GEOCODER_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent to the data source and geocoder.
///
/// Nominatim's usage policy requires an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!("fishfry-finder/", env!("CARGO_PKG_VERSION"));

/// Number of results shown by `search` unless `--limit` is given.
pub const DEFAULT_RESULT_LIMIT: usize = 15;

/// Maximum venues printed by `details` when several names match.
pub const MAX_DETAIL_MATCHES: usize = 5;

/// Maximum events listed in a venue's detail view.
pub const MAX_DETAIL_EVENTS: usize = 10;

/// Maximum "did you mean" suggestions for an unknown venue name.
pub const MAX_NAME_SUGGESTIONS: usize = 5;

/// Hour after which today's Friday no longer counts as the upcoming fish fry day.
pub const FRIDAY_CUTOFF_HOUR: u32 = 20;
