//! Venue filtering and name lookup.
//!
//! This module handles:
//! - Feature flag filters (every requested feature must be present)
//! - Case-insensitive name substring filters
//! - Venue type filters
//! - Name lookup for `details`, with a normalized fallback and suggestions

use std::collections::BTreeSet;

use crate::models::{Feature, Venue, VenueType};
use crate::text::{contains_ignore_case, normalize, words};

/// Criteria combined with logical AND. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct VenueFilter {
    pub features: BTreeSet<Feature>,
    pub name: Option<String>,
    pub venue_type: Option<VenueType>,
}

impl VenueFilter {
    pub fn with_features(features: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            features: features.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.name.is_none() && self.venue_type.is_none()
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        self.features.iter().all(|f| venue.has_feature(*f))
            && self
                .name
                .as_deref()
                .is_none_or(|name| contains_ignore_case(&venue.name, name))
            && self.venue_type.is_none_or(|t| venue.venue_type == t)
    }

    /// Matching venues in their original order.
    pub fn apply<'a, I>(&self, venues: I) -> Vec<&'a Venue>
    where
        I: IntoIterator<Item = &'a Venue>,
    {
        venues.into_iter().filter(|v| self.matches(v)).collect()
    }
}

/// Finds venues by name.
///
/// Tries a case-insensitive substring match first; if nothing matches, retries
/// with both sides normalized so "Saint Alphonsus" finds "St. Alphonsus".
pub fn find_by_name<'a>(venues: &'a [Venue], query: &str) -> Vec<&'a Venue> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let direct: Vec<&Venue> = venues
        .iter()
        .filter(|v| contains_ignore_case(&v.name, query))
        .collect();
    if !direct.is_empty() {
        return direct;
    }

    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }
    venues
        .iter()
        .filter(|v| normalize(&v.name).contains(&needle))
        .collect()
}

/// Names sharing at least one word with `query`, up to `max`, in dataset order.
pub fn suggest_names<'a>(venues: &'a [Venue], query: &str, max: usize) -> Vec<&'a str> {
    let query_words: BTreeSet<String> = words(query)
        .into_iter()
        .filter(|w| w.len() > 1)
        .collect();
    if query_words.is_empty() {
        return Vec::new();
    }

    let mut seen = BTreeSet::new();
    venues
        .iter()
        .filter(|v| words(&v.name).iter().any(|w| query_words.contains(w)))
        .map(|v| v.name.as_str())
        .filter(|name| seen.insert(*name))
        .take(max)
        .collect()
}
