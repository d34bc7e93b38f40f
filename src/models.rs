//! Venue and event data structures.
//!
//! These are the normalized records produced by the data loader. They are
//! immutable for the duration of a run; every other module borrows them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Category of organization hosting a fish fry.
///
/// Parsing is case-insensitive and accepts the dataset's display names as
/// well as hyphenated forms usable on the command line (`fire-department`).
/// Anything unrecognized falls back to [`VenueType::Unsure`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum VenueType {
    Church,
    #[strum(to_string = "Fire Department", serialize = "fire-department")]
    #[serde(rename = "Fire Department")]
    FireDepartment,
    Restaurant,
    #[strum(
        to_string = "Community Organization",
        serialize = "community-organization"
    )]
    #[serde(rename = "Community Organization")]
    CommunityOrganization,
    #[strum(to_string = "Food Truck", serialize = "food-truck")]
    #[serde(rename = "Food Truck")]
    FoodTruck,
    Market,
    #[default]
    Unsure,
}

impl VenueType {
    /// Parses a dataset value, defaulting to `Unsure` for unknown categories.
    pub fn from_dataset(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

/// Boolean amenities a venue can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Pierogies,
    Accessible,
    Alcohol,
    Takeout,
    Lunch,
}

impl Feature {
    /// Human-readable label used by the text presenter.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Pierogies => "🥟 Homemade Pierogies",
            Feature::Accessible => "♿ Wheelchair Accessible",
            Feature::Alcohol => "🍺 Alcohol",
            Feature::Takeout => "📦 Takeout",
            Feature::Lunch => "☀️ Lunch",
        }
    }
}

/// Feature flags as published in the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub pierogies: bool,
    pub accessible: bool,
    pub alcohol: bool,
    pub takeout: bool,
    pub lunch: bool,
}

impl FeatureFlags {
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::Pierogies => self.pierogies,
            Feature::Accessible => self.accessible,
            Feature::Alcohol => self.alcohol,
            Feature::Takeout => self.takeout,
            Feature::Lunch => self.lunch,
        }
    }
}

/// A scheduled time window at a venue, in local wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl Event {
    /// Calendar date the event starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// A location hosting fish-fry events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub id: Option<String>,
    pub name: String,
    pub venue_type: VenueType,
    pub address: String,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub menu_text: Option<String>,
    pub menu_url: Option<String>,
    pub features: FeatureFlags,
    /// Free-text hours and miscellany ("etc" in the dataset).
    pub etc: Option<String>,
    pub location: Option<GeoPoint>,
    pub publish: bool,
    pub events: Vec<Event>,
}

impl Venue {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.has(feature)
    }

    /// Features this venue offers, in display order.
    pub fn feature_list(&self) -> Vec<Feature> {
        use strum::IntoEnumIterator;
        Feature::iter().filter(|f| self.has_feature(*f)).collect()
    }

    /// First event starting on `date`, if any.
    pub fn event_on(&self, date: NaiveDate) -> Option<&Event> {
        self.events.iter().find(|e| e.date() == date)
    }
}

impl Default for Venue {
    fn default() -> Self {
        Self {
            id: None,
            name: "Unknown".to_string(),
            venue_type: VenueType::Unsure,
            address: String::new(),
            notes: None,
            phone: None,
            email: None,
            website: None,
            menu_text: None,
            menu_url: None,
            features: FeatureFlags::default(),
            etc: None,
            location: None,
            publish: true,
            events: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_type_parses_dataset_names() {
        assert_eq!(VenueType::from_dataset("Church"), VenueType::Church);
        assert_eq!(
            VenueType::from_dataset("Fire Department"),
            VenueType::FireDepartment
        );
        assert_eq!(
            VenueType::from_dataset("community organization"),
            VenueType::CommunityOrganization
        );
        assert_eq!(VenueType::from_dataset(" food truck "), VenueType::FoodTruck);
    }

    #[test]
    fn test_venue_type_accepts_cli_forms() {
        assert_eq!(
            "fire-department".parse::<VenueType>().unwrap(),
            VenueType::FireDepartment
        );
        assert_eq!("CHURCH".parse::<VenueType>().unwrap(), VenueType::Church);
    }

    #[test]
    fn test_venue_type_unknown_defaults_to_unsure() {
        assert_eq!(VenueType::from_dataset("Bowling Alley"), VenueType::Unsure);
        assert_eq!(VenueType::from_dataset(""), VenueType::Unsure);
    }

    #[test]
    fn test_venue_type_display() {
        assert_eq!(VenueType::FireDepartment.to_string(), "Fire Department");
        assert_eq!(VenueType::Market.to_string(), "Market");
    }

    #[test]
    fn test_feature_list_in_display_order() {
        let venue = Venue {
            features: FeatureFlags {
                lunch: true,
                pierogies: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(venue.feature_list(), vec![Feature::Pierogies, Feature::Lunch]);
        let labels: Vec<_> = venue.feature_list().iter().map(Feature::label).collect();
        assert_eq!(labels, vec!["🥟 Homemade Pierogies", "☀️ Lunch"]);
    }

    #[test]
    fn test_geo_point_validity() {
        assert!(GeoPoint::new(40.44, -79.99).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_valid());
    }
}
