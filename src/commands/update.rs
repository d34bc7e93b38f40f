use anyhow::{bail, Result};
use serde::Serialize;

use super::{AppContext, CommandOutput, Outcome};
use crate::data::DataOrigin;
use crate::present::format_update;

#[derive(Serialize)]
struct UpdateReport<'a> {
    venues: usize,
    cache_file: &'a std::path::Path,
}

/// Refetches the dataset and replaces the cache.
///
/// # Errors
///
/// Fails in offline mode, when the source cannot be fetched (the stale
/// cache is not an acceptable substitute for an explicit refresh), and when
/// the fetched dataset could not be written to the cache file.
pub async fn update(ctx: &AppContext) -> Result<CommandOutput> {
    if ctx.config.offline {
        bail!("Cannot update the cache in offline mode");
    }

    let dataset = ctx.load(true).await?;
    if dataset.origin != DataOrigin::Source {
        bail!(
            "Could not fetch {}; the cache at {} was left unchanged",
            ctx.config.data_source,
            ctx.config.cache_file.display()
        );
    }

    if !dataset.cache_written {
        bail!(
            "Fetched {} venues but could not write the cache at {}",
            dataset.venues.len(),
            ctx.config.cache_file.display()
        );
    }

    let count = dataset.venues.len();
    let report = UpdateReport {
        venues: count,
        cache_file: &ctx.config.cache_file,
    };
    ctx.render(&report, || format_update(count), Outcome::Found)
}
