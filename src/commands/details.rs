use anyhow::Result;

use super::{AppContext, CommandOutput, Outcome};
use crate::config::{MAX_DETAIL_MATCHES, MAX_NAME_SUGGESTIONS};
use crate::filter::{find_by_name, suggest_names};
use crate::present::{format_details, format_unknown_venue};

/// Full details for venues whose name matches `query`.
///
/// At most five matches are shown. With no match, the output suggests names
/// sharing a word with the query and the outcome is `NotFound`.
pub async fn details(ctx: &AppContext, query: &str) -> Result<CommandOutput> {
    let dataset = ctx.load(false).await?;

    let matches = find_by_name(&dataset.venues, query);
    if matches.is_empty() {
        let suggestions = suggest_names(&dataset.venues, query, MAX_NAME_SUGGESTIONS);
        return ctx.not_found(format_unknown_venue(query, &suggestions));
    }
    if matches.len() > MAX_DETAIL_MATCHES {
        log::info!(
            "{} venues match '{}', showing the first {}",
            matches.len(),
            query,
            MAX_DETAIL_MATCHES
        );
    }

    let shown = &matches[..matches.len().min(MAX_DETAIL_MATCHES)];
    ctx.render(&shown, || format_details(query, shown), Outcome::Found)
}
