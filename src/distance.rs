//! Great-circle distance and distance ranking.

use serde::Serialize;

use crate::models::{GeoPoint, Venue};

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between two points, in miles.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Clamp guards against h drifting just above 1.0 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// A venue with its distance from the search origin.
#[derive(Debug, Clone, Serialize)]
pub struct RankedVenue<'a> {
    #[serde(flatten)]
    pub venue: &'a Venue,
    pub distance_miles: f64,
}

/// Ranks venues by distance from `origin`, nearest first.
///
/// Venues without a location are omitted. The sort is stable, so venues at
/// equal distance keep their input order.
pub fn rank_by_distance<'a, I>(origin: GeoPoint, venues: I) -> Vec<RankedVenue<'a>>
where
    I: IntoIterator<Item = &'a Venue>,
{
    let mut ranked: Vec<RankedVenue<'a>> = venues
        .into_iter()
        .filter_map(|venue| {
            venue.location.map(|location| RankedVenue {
                venue,
                distance_miles: haversine_miles(origin, location),
            })
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked
}

/// Drops venues farther than `radius_miles` (if given), then keeps at most `limit`.
pub fn within(
    ranked: Vec<RankedVenue<'_>>,
    radius_miles: Option<f64>,
    limit: usize,
) -> Vec<RankedVenue<'_>> {
    ranked
        .into_iter()
        .take_while(|r| radius_miles.is_none_or(|radius| r.distance_miles <= radius))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOWNTOWN: GeoPoint = GeoPoint::new(40.4406, -79.9959);

    fn venue_at(name: &str, location: Option<GeoPoint>) -> Venue {
        Venue {
            name: name.to_string(),
            location,
            ..Default::default()
        }
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        assert_eq!(haversine_miles(DOWNTOWN, DOWNTOWN), 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Downtown Pittsburgh to downtown Philadelphia is roughly 257 miles.
        let philadelphia = GeoPoint::new(39.9526, -75.1652);
        let d = haversine_miles(DOWNTOWN, philadelphia);
        assert!((250.0..265.0).contains(&d), "got {d}");
        assert!((d - haversine_miles(philadelphia, DOWNTOWN)).abs() < 1e-9);
    }

    #[test]
    fn test_rank_is_non_decreasing_and_skips_unlocated() {
        let venues = vec![
            venue_at("Far", Some(GeoPoint::new(40.6262, -80.0556))),
            venue_at("Nowhere", None),
            venue_at("Near", Some(GeoPoint::new(40.4450, -79.9900))),
            venue_at("Middle", Some(GeoPoint::new(40.4330, -79.9230))),
        ];
        let ranked = rank_by_distance(DOWNTOWN, &venues);

        let names: Vec<_> = ranked.iter().map(|r| r.venue.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Middle", "Far"]);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].distance_miles <= w[1].distance_miles));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let spot = Some(GeoPoint::new(40.45, -79.95));
        let venues = vec![
            venue_at("First", spot),
            venue_at("Second", spot),
            venue_at("Third", spot),
        ];
        let ranked = rank_by_distance(DOWNTOWN, &venues);
        let names: Vec<_> = ranked.iter().map(|r| r.venue.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_within_radius_and_limit() {
        let venues = vec![
            venue_at("A", Some(DOWNTOWN)),
            venue_at("B", Some(GeoPoint::new(40.4450, -79.9900))),
            venue_at("C", Some(GeoPoint::new(40.6262, -80.0556))),
        ];
        let ranked = rank_by_distance(DOWNTOWN, &venues);
        assert_eq!(within(ranked.clone(), Some(2.0), 10).len(), 2);
        assert_eq!(within(ranked.clone(), None, 1).len(), 1);
        assert_eq!(within(ranked, None, 10).len(), 3);
    }
}
