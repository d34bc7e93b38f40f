use anyhow::Result;
use serde::Serialize;

use super::{AppContext, CommandOutput, Outcome};
use crate::distance::{rank_by_distance, within, RankedVenue};
use crate::filter::VenueFilter;
use crate::geocode::GeoLocation;
use crate::present::{format_search_results, format_unknown_location};

#[derive(Serialize)]
struct SearchReport<'a> {
    location: &'a GeoLocation,
    total: usize,
    results: &'a [RankedVenue<'a>],
}

/// Venues near `location` matching `filter`, nearest first.
///
/// Returns `Outcome::NotFound` if the location cannot be resolved.
pub async fn search(
    ctx: &AppContext,
    location: &str,
    filter: &VenueFilter,
    limit: usize,
    radius_miles: Option<f64>,
) -> Result<CommandOutput> {
    let dataset = ctx.load(false).await?;

    let Some(origin) = ctx.geocoder.resolve(location).await else {
        return ctx.not_found(format_unknown_location(location));
    };
    log::info!(
        "Searching near: {} ({:.4}, {:.4})",
        origin.query,
        origin.point.latitude,
        origin.point.longitude
    );

    let ranked = rank_by_distance(origin.point, filter.apply(&dataset.venues));
    let mut results = within(ranked, radius_miles, usize::MAX);
    let total = results.len();
    results.truncate(limit);

    let report = SearchReport {
        location: &origin,
        total,
        results: &results,
    };
    ctx.render(
        &report,
        || format_search_results(&results, total),
        Outcome::from_count(results.len()),
    )
}
