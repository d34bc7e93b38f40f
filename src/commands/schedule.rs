use anyhow::Result;
use chrono::NaiveDateTime;

use super::{AppContext, CommandOutput, Outcome};
use crate::present::{format_bad_day, format_schedule};
use crate::schedule::{resolve_schedule, DayQuery};

/// Venues with an event on the requested day (default: the upcoming Friday).
pub async fn schedule(
    ctx: &AppContext,
    day: Option<&str>,
    now: NaiveDateTime,
) -> Result<CommandOutput> {
    let query = match DayQuery::from_arg(day) {
        Ok(query) => query,
        Err(e) => {
            log::debug!("{}", e);
            return ctx.not_found(format_bad_day(day.unwrap_or_default().trim()));
        }
    };

    let dataset = ctx.load(false).await?;
    let schedule = resolve_schedule(&dataset.venues, query, now);
    ctx.render(
        &schedule,
        || format_schedule(&schedule),
        Outcome::from_count(schedule.entries.len()),
    )
}
