//! Location resolution.
//!
//! Resolves free text (zip code, neighborhood, street address) to a point:
//! 1. Zip codes and neighborhood names from the built-in table
//! 2. An external Nominatim-compatible geocoder, when configured
//! 3. A known zip code embedded in a longer address
//!
//! Ambiguous input is not disambiguated; the first match wins.

mod nominatim;
mod table;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::Config;
use crate::models::GeoPoint;
use crate::text::normalize;

pub use nominatim::{decorate_query, NominatimClient};

/// Bare zip code, optionally ZIP+4.
static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{5})(?:-\d{4})?$").expect("valid zip regex"));

/// Zip code somewhere inside a longer string.
static EMBEDDED_ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{5})(?:-\d{4})?\b").expect("valid zip regex"));

/// Trailing city/state words that do not help the table lookup.
const REGION_SUFFIXES: &[&str] = &["pa", "pennsylvania", "pittsburgh", "pgh"];

/// How a location was resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LocationSource {
    /// Zip code from the built-in table
    ZipCode(String),
    /// Neighborhood from the built-in table (canonical name)
    Neighborhood(String),
    /// External geocoder
    Geocoder,
}

/// A resolved location query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub query: String,
    pub point: GeoPoint,
    pub source: LocationSource,
}

/// Resolves location queries using the built-in table and an optional
/// external geocoder.
#[derive(Debug, Clone, Default)]
pub struct Geocoder {
    external: Option<NominatimClient>,
}

impl Geocoder {
    /// Geocoder that only consults the built-in table.
    pub fn offline() -> Self {
        Self { external: None }
    }

    /// Geocoder configured from `config`; external lookups are disabled when
    /// no geocoder URL is set or the configuration is offline.
    pub fn from_config(config: &Config, client: &reqwest::Client) -> Self {
        let external = config
            .active_geocoder_url()
            .map(|url| NominatimClient::new(client.clone(), url, config.geocoder_timeout()));
        Self { external }
    }

    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    /// Resolves `query`, returning `None` if nothing matches.
    pub async fn resolve(&self, query: &str) -> Option<GeoLocation> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(location) = resolve_static(query) {
            return Some(location);
        }

        if let Some(external) = &self.external {
            let decorated = decorate_query(query);
            match external.search(&decorated).await {
                Ok(Some(point)) => {
                    return Some(GeoLocation {
                        query: query.to_string(),
                        point,
                        source: LocationSource::Geocoder,
                    })
                }
                Ok(None) => log::debug!("Geocoder found nothing for '{}'", decorated),
                Err(e) => log::warn!("Geocoding failed: {}", e),
            }
        }

        resolve_embedded_zip(query)
    }
}

/// Resolves `query` against the built-in zip and neighborhood table.
pub fn resolve_static(query: &str) -> Option<GeoLocation> {
    let query = query.trim();

    if let Some(caps) = ZIP_PATTERN.captures(query) {
        let zip = &caps[1];
        return table::lookup_zip(zip).map(|point| GeoLocation {
            query: query.to_string(),
            point,
            source: LocationSource::ZipCode(zip.to_string()),
        });
    }

    let key = strip_region_suffix(&normalize(query));
    if key.is_empty() {
        return None;
    }
    table::lookup_neighborhood(&key).map(|(name, point)| GeoLocation {
        query: query.to_string(),
        point,
        source: LocationSource::Neighborhood(name.to_string()),
    })
}

/// Falls back to the first known zip code inside an address string.
fn resolve_embedded_zip(query: &str) -> Option<GeoLocation> {
    EMBEDDED_ZIP_PATTERN
        .captures_iter(query)
        .find_map(|caps| {
            let zip = caps[1].to_string();
            table::lookup_zip(&zip).map(|point| (zip, point))
        })
        .map(|(zip, point)| GeoLocation {
            query: query.to_string(),
            point,
            source: LocationSource::ZipCode(zip),
        })
}

/// Drops trailing "pittsburgh", "pa" and the like from a normalized query.
fn strip_region_suffix(normalized: &str) -> String {
    let mut words: Vec<&str> = normalized.split_whitespace().collect();
    while words.len() > 1 && words.last().is_some_and(|w| REGION_SUFFIXES.contains(w)) {
        words.pop();
    }
    words.join(" ")
}
