//! Nominatim (OpenStreetMap) search client.

use std::time::Duration;

use serde::Deserialize;

use crate::error_handling::GeocodeError;
use crate::models::GeoPoint;

/// One search hit. Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Client for a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl NominatimClient {
    pub fn new(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Searches for `query` (already decorated) and returns the first hit.
    pub async fn search(&self, query: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let url = url::Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("q", query), ("format", "json"), ("limit", "1")],
        )?;

        log::debug!("Geocoding via {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> = serde_json::from_str(&body)?;
        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let point = parse_point(&place.lat, &place.lon)?;
        if let Some(name) = place.display_name {
            log::debug!("Geocoder matched '{}'", name);
        }
        Ok(Some(point))
    }
}

fn parse_point(lat: &str, lon: &str) -> Result<GeoPoint, GeocodeError> {
    let invalid = || GeocodeError::InvalidCoordinate(format!("{lat},{lon}"));
    let point = GeoPoint::new(
        lat.trim().parse().map_err(|_| invalid())?,
        lon.trim().parse().map_err(|_| invalid())?,
    );
    if point.is_valid() {
        Ok(point)
    } else {
        Err(invalid())
    }
}

/// Adds regional context so bare zips and neighborhood names resolve locally.
///
/// A bare 5-digit zip becomes "`<zip>`, PA"; anything that does not already
/// mention Pennsylvania, Pittsburgh or contain a comma gets
/// ", Pittsburgh, PA" appended.
pub fn decorate_query(query: &str) -> String {
    let query = query.trim();
    if query.len() == 5 && query.chars().all(|c| c.is_ascii_digit()) {
        return format!("{query}, PA");
    }

    let lower = query.to_lowercase();
    let has_context = lower.contains(',')
        || lower.contains("pennsylvania")
        || lower.contains("pittsburgh")
        || lower.split_whitespace().any(|w| w == "pa");
    if has_context {
        query.to_string()
    } else {
        format!("{query}, Pittsburgh, PA")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_bare_zip() {
        assert_eq!(decorate_query("15090"), "15090, PA");
        assert_eq!(decorate_query(" 15090 "), "15090, PA");
    }

    #[test]
    fn test_decorate_adds_city() {
        assert_eq!(
            decorate_query("5000 Forbes Ave"),
            "5000 Forbes Ave, Pittsburgh, PA"
        );
        assert_eq!(decorate_query("Panther Hollow"), "Panther Hollow, Pittsburgh, PA");
    }

    #[test]
    fn test_decorate_keeps_existing_context() {
        assert_eq!(decorate_query("Erie, PA"), "Erie, PA");
        assert_eq!(decorate_query("Sewickley pa"), "Sewickley pa");
        assert_eq!(
            decorate_query("Pittsburgh International Airport"),
            "Pittsburgh International Airport"
        );
    }

    #[test]
    fn test_decorate_does_not_match_pa_inside_words() {
        // "Panther" contains "pa" but is not a state reference
        assert!(decorate_query("Panther Hollow").ends_with(", Pittsburgh, PA"));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(
            parse_point("40.4406", "-79.9959").unwrap(),
            GeoPoint::new(40.4406, -79.9959)
        );
        assert!(parse_point("north", "-79.9").is_err());
        assert!(parse_point("95.0", "-79.9").is_err());
    }
}
