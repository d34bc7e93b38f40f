//! GeoJSON parsing and venue normalization.
//!
//! The dataset is maintained by volunteers, so parsing is lenient
//! at the feature level: one bad record is skipped or defaulted, never fatal.
//! Only a payload that is not a FeatureCollection at all is rejected.

use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error_handling::DataError;
use crate::models::{Event, FeatureFlags, GeoPoint, Venue, VenueType};

/// Timestamp layouts seen in the dataset's `dt_start`/`dt_end` fields.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a GeoJSON FeatureCollection into venues, in feature order.
///
/// Unpublished venues are kept here; the loader decides what to show.
///
/// # Errors
///
/// Returns `DataError::Json` if the text is not JSON and
/// `DataError::NotFeatureCollection` if it has no `features` array.
pub fn parse_venues(text: &str) -> Result<Vec<Venue>, DataError> {
    let root: Value = serde_json::from_str(text)?;
    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or(DataError::NotFeatureCollection)?;

    let mut venues = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match normalize_feature(feature) {
            Some(venue) => venues.push(venue),
            None => log::debug!("Skipping malformed feature #{}", index),
        }
    }
    Ok(venues)
}

/// Normalizes one GeoJSON feature. Returns `None` if it has no properties object.
pub fn normalize_feature(feature: &Value) -> Option<Venue> {
    let props = feature.get("properties")?.as_object()?;

    let menu = props.get("menu").and_then(Value::as_object);
    let venue = Venue {
        id: feature.get("id").and_then(id_string),
        name: text_field(props, "venue_name").unwrap_or_else(|| "Unknown".to_string()),
        venue_type: text_field(props, "venue_type")
            .map(|t| VenueType::from_dataset(&t))
            .unwrap_or_default(),
        address: text_field(props, "venue_address").unwrap_or_default(),
        notes: text_field(props, "venue_notes"),
        phone: text_field(props, "phone"),
        email: text_field(props, "email"),
        website: text_field(props, "website"),
        menu_text: menu.and_then(|m| text_field(m, "text")),
        menu_url: menu.and_then(|m| text_field(m, "url")),
        features: FeatureFlags {
            pierogies: flag(props, "homemade_pierogies"),
            accessible: flag(props, "handicap"),
            alcohol: flag(props, "alcohol"),
            takeout: flag(props, "take_out"),
            lunch: flag(props, "lunch"),
        },
        etc: text_field(props, "etc"),
        location: feature.get("geometry").and_then(point),
        publish: props.get("publish").map(truthy).unwrap_or(true),
        events: props
            .get("events")
            .and_then(Value::as_array)
            .map(|events| events.iter().filter_map(parse_event).collect())
            .unwrap_or_default(),
    };
    Some(venue)
}

/// Parses an ISO-8601 timestamp into local wall-clock time.
///
/// A trailing `Z` or offset is accepted and dropped; the wall-clock value is
/// kept as written.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn parse_event(value: &Value) -> Option<Event> {
    let start = value.get("dt_start")?.as_str().and_then(parse_timestamp)?;
    let end = value
        .get("dt_end")
        .and_then(Value::as_str)
        .and_then(parse_timestamp);
    Some(Event { start, end })
}

/// Reads a GeoJSON Point as `[longitude, latitude]`.
fn point(geometry: &Value) -> Option<GeoPoint> {
    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }
    let coords = geometry.get("coordinates")?.as_array()?;
    let lon = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    let p = GeoPoint::new(lat, lon);
    // (0, 0) marks an address that was never geocoded.
    (p.is_valid() && !(lat == 0.0 && lon == 0.0)).then_some(p)
}

/// Non-empty trimmed string field; numbers are accepted and stringified.
fn text_field(props: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match props.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn flag(props: &Map<String, Value>, key: &str) -> bool {
    props.get(key).map(truthy).unwrap_or(false)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn feature(properties: Value) -> Value {
        json!({
            "type": "Feature",
            "id": 42,
            "geometry": { "type": "Point", "coordinates": [-79.9559, 40.4406] },
            "properties": properties
        })
    }

    #[test]
    fn test_normalize_full_feature() {
        let f = feature(json!({
            "venue_name": "St. Alphonsus Church",
            "venue_type": "Church",
            "venue_address": "201 Church Rd, Wexford, PA 15090",
            "venue_notes": "Enter through the school",
            "phone": "724-935-1743",
            "email": "fishfry@example.org",
            "website": "https://example.org",
            "menu": { "text": "Baked cod, fries", "url": "https://example.org/menu" },
            "homemade_pierogies": true,
            "handicap": true,
            "alcohol": false,
            "take_out": true,
            "lunch": false,
            "etc": "Fridays 4-7pm",
            "publish": true,
            "events": [
                { "dt_start": "2025-03-07T16:00:00", "dt_end": "2025-03-07T19:00:00" }
            ]
        }));

        let venue = normalize_feature(&f).unwrap();
        assert_eq!(venue.id.as_deref(), Some("42"));
        assert_eq!(venue.name, "St. Alphonsus Church");
        assert_eq!(venue.venue_type, VenueType::Church);
        assert_eq!(venue.menu_text.as_deref(), Some("Baked cod, fries"));
        assert_eq!(venue.menu_url.as_deref(), Some("https://example.org/menu"));
        assert!(venue.features.pierogies);
        assert!(venue.features.accessible);
        assert!(!venue.features.alcohol);
        assert!(venue.features.takeout);
        assert_eq!(venue.location, Some(GeoPoint::new(40.4406, -79.9559)));
        assert_eq!(venue.events.len(), 1);
        assert_eq!(
            venue.events[0].date(),
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let venue = normalize_feature(&json!({ "properties": {} })).unwrap();
        assert_eq!(venue.name, "Unknown");
        assert_eq!(venue.venue_type, VenueType::Unsure);
        assert_eq!(venue.address, "");
        assert!(venue.publish);
        assert!(venue.location.is_none());
        assert!(venue.events.is_empty());
        assert_eq!(venue.features, FeatureFlags::default());
    }

    #[test]
    fn test_feature_without_properties_is_skipped() {
        assert!(normalize_feature(&json!({ "geometry": null })).is_none());
        assert!(normalize_feature(&json!({ "properties": "oops" })).is_none());
    }

    #[test]
    fn test_mistyped_fields_default() {
        let venue = normalize_feature(&feature(json!({
            "venue_name": ["not", "a", "string"],
            "handicap": "yes",
            "alcohol": 1,
            "take_out": "no",
            "menu": "see website",
            "events": "weekly"
        })))
        .unwrap();
        assert_eq!(venue.name, "Unknown");
        assert!(venue.features.accessible);
        assert!(venue.features.alcohol);
        assert!(!venue.features.takeout);
        assert!(venue.menu_text.is_none());
        assert!(venue.events.is_empty());
    }

    #[test]
    fn test_bad_event_dropped_individually() {
        let venue = normalize_feature(&feature(json!({
            "events": [
                { "dt_start": "not a date" },
                { "dt_end": "2025-03-07T19:00:00" },
                { "dt_start": "2025-03-14T16:00:00Z", "dt_end": "garbage" }
            ]
        })))
        .unwrap();
        assert_eq!(venue.events.len(), 1);
        assert_eq!(
            venue.events[0].start,
            NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap()
        );
        assert!(venue.events[0].end.is_none());
    }

    #[test]
    fn test_invalid_geometry_yields_no_location() {
        for geometry in [
            json!({ "type": "Point", "coordinates": [0, 0] }),
            json!({ "type": "Point", "coordinates": [-79.9] }),
            json!({ "type": "Point", "coordinates": [-79.9, 140.0] }),
            json!({ "type": "LineString", "coordinates": [[-79.9, 40.4], [-79.8, 40.5]] }),
            json!(null),
        ] {
            let f = json!({ "geometry": geometry, "properties": { "venue_name": "X" } });
            assert!(normalize_feature(&f).unwrap().location.is_none());
        }
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2025-03-07T16:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-07T16:30"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-07T16:30:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-07T16:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-07T16:30:00-05:00"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("Friday"), None);
    }

    #[test]
    fn test_parse_venues_rejects_non_collection() {
        assert!(matches!(
            parse_venues("{\"type\": \"Feature\"}"),
            Err(DataError::NotFeatureCollection)
        ));
        assert!(matches!(parse_venues("<html>"), Err(DataError::Json(_))));
    }

    #[test]
    fn test_parse_venues_keeps_order_and_skips_bad_features() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [
                { "properties": { "venue_name": "First" } },
                42,
                { "properties": { "venue_name": "Second", "publish": false } }
            ]
        })
        .to_string();
        let venues = parse_venues(&text).unwrap();
        let names: Vec<_> = venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(!venues[1].publish);
    }
}
