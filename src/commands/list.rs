use anyhow::Result;

use super::{AppContext, CommandOutput, Outcome};
use crate::filter::VenueFilter;
use crate::present::format_list;

/// All venues matching `filter`, sorted by name.
pub async fn list(ctx: &AppContext, filter: &VenueFilter) -> Result<CommandOutput> {
    let dataset = ctx.load(false).await?;

    let mut venues = filter.apply(&dataset.venues);
    venues.sort_by(|a, b| a.name.cmp(&b.name));

    ctx.render(
        &venues,
        || format_list(&venues),
        Outcome::from_count(venues.len()),
    )
}
