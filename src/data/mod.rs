//! Venue dataset loading and caching.
//!
//! This module handles:
//! - Fetching the GeoJSON dataset from a URL or local path
//! - Caching the raw dataset locally with expiration
//! - Falling back to a stale cache when the source is unreachable
//! - Normalizing features into [`Venue`] records

mod cache;
mod fetch;
mod geojson;

use crate::config::Config;
use crate::error_handling::DataError;
use crate::models::Venue;

use cache::{read_cache, write_cache};
use fetch::fetch_source;

pub use geojson::{normalize_feature, parse_timestamp, parse_venues};

/// Where a loaded dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Cache file younger than the configured maximum age
    Cache,
    /// Freshly fetched from the data source
    Source,
    /// Cache of any age, used because the source could not be fetched
    StaleCache,
}

/// Published venues plus their provenance.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub venues: Vec<Venue>,
    pub origin: DataOrigin,
    /// True only when this load replaced the cache file.
    pub cache_written: bool,
}

impl Dataset {
    fn from_text(text: &str, origin: DataOrigin) -> Result<Self, DataError> {
        let all = parse_venues(text)?;
        let total = all.len();
        let venues: Vec<Venue> = all.into_iter().filter(|v| v.publish).collect();
        if venues.len() < total {
            log::debug!("Hiding {} unpublished venue(s)", total - venues.len());
        }
        Ok(Self {
            venues,
            origin,
            cache_written: false,
        })
    }
}

/// Loads the venue dataset.
///
/// Order of preference:
/// 1. Fresh cache (skipped when `force_refresh` is set)
/// 2. The configured data source, which then replaces the cache
/// 3. The cache at any age
///
/// With `config.offline` set, step 2 is skipped.
///
/// # Errors
///
/// Returns `DataError::Unavailable` if neither the source nor the cache yields
/// a parseable dataset.
pub async fn load_venues(
    config: &Config,
    client: &reqwest::Client,
    force_refresh: bool,
) -> Result<Dataset, DataError> {
    let cache_path = config.cache_file.as_path();

    if !force_refresh {
        match read_cache(cache_path, Some(config.cache_max_age)).await {
            Ok(text) => match Dataset::from_text(&text, DataOrigin::Cache) {
                Ok(dataset) => {
                    log::debug!(
                        "Loaded {} venues from cache {}",
                        dataset.venues.len(),
                        cache_path.display()
                    );
                    return Ok(dataset);
                }
                Err(e) => log::warn!("Ignoring unreadable cache: {}", e),
            },
            Err(e) => log::debug!("Cache not used: {}", e),
        }
    }

    let fetch_failure = if config.offline {
        "offline mode".to_string()
    } else {
        log::info!("Fetching fresh fish fry data...");
        match fetch_and_cache(config, client).await {
            Ok(dataset) => {
                log::info!("Loaded {} fish fry venues.", dataset.venues.len());
                return Ok(dataset);
            }
            Err(e) => {
                log::warn!("Error fetching data: {}", e);
                e.to_string()
            }
        }
    };

    match read_cache(cache_path, None).await {
        Ok(text) => {
            let dataset = Dataset::from_text(&text, DataOrigin::StaleCache).map_err(|e| {
                DataError::Unavailable {
                    reason: format!("{fetch_failure}; cache unreadable: {e}"),
                }
            })?;
            if !config.offline {
                log::warn!("Using cached data.");
            }
            Ok(dataset)
        }
        Err(e) => Err(DataError::Unavailable {
            reason: format!("{fetch_failure}; {e}"),
        }),
    }
}

/// Fetches the source, validates it, then replaces the cache.
async fn fetch_and_cache(config: &Config, client: &reqwest::Client) -> Result<Dataset, DataError> {
    let text = fetch_source(client, &config.data_source, config.timeout()).await?;
    // Parse before caching so a broken payload never overwrites a good cache.
    let mut dataset = Dataset::from_text(&text, DataOrigin::Source)?;
    match write_cache(&config.cache_file, &text).await {
        Ok(()) => dataset.cache_written = true,
        Err(e) => log::warn!("Failed to update cache: {}", e),
    }
    Ok(dataset)
}
