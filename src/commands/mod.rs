//! Command implementations.
//!
//! Each command loads the dataset, runs the relevant lookups and hands the
//! result to the presenter. Commands return their rendered output instead of
//! printing, so the binary decides where it goes and which exit code to use.

mod details;
mod list;
mod schedule;
mod search;
mod update;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::config::{Command, Config, OutputFormat};
use crate::data::{load_venues, Dataset};
use crate::filter::VenueFilter;
use crate::geocode::Geocoder;
use crate::initialization::init_client;
use crate::present::render_json;

pub use details::details;
pub use list::list;
pub use schedule::schedule;
pub use search::search;
pub use update::update;

/// How a command ended, independent of its rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one result.
    Found,
    /// The query ran but nothing matched the filters.
    Empty,
    /// The location, venue or day could not be resolved.
    NotFound,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Found | Outcome::Empty => 0,
            Outcome::NotFound => 2,
        }
    }

    fn from_count(count: usize) -> Self {
        if count == 0 {
            Outcome::Empty
        } else {
            Outcome::Found
        }
    }
}

/// Rendered command output plus its outcome.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub text: String,
    pub outcome: Outcome,
}

/// Shared state for one invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub client: reqwest::Client,
    pub geocoder: Geocoder,
}

impl AppContext {
    /// Builds the HTTP client and geocoder from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let geocoder = Geocoder::from_config(&config, &client);
        Ok(Self {
            config,
            client,
            geocoder,
        })
    }

    fn json(&self) -> bool {
        self.config.output_format == OutputFormat::Json
    }

    async fn load(&self, force_refresh: bool) -> Result<Dataset> {
        let dataset = load_venues(&self.config, &self.client, force_refresh)
            .await
            .context("Failed to load fish fry data")?;
        log::debug!(
            "{} venues available ({:?})",
            dataset.venues.len(),
            dataset.origin
        );
        Ok(dataset)
    }

    /// Text output, or `record` as JSON when JSON output is selected.
    fn render<T: Serialize>(
        &self,
        record: &T,
        text: impl FnOnce() -> String,
        outcome: Outcome,
    ) -> Result<CommandOutput> {
        let text = if self.json() {
            render_json(record).context("Failed to serialize output")?
        } else {
            text()
        };
        Ok(CommandOutput { text, outcome })
    }

    /// A "could not resolve" message.
    fn not_found(&self, message: String) -> Result<CommandOutput> {
        #[derive(Serialize)]
        struct NotFound<'a> {
            error: &'a str,
        }
        self.render(
            &NotFound { error: &message },
            || message.clone(),
            Outcome::NotFound,
        )
    }
}

/// Runs `command` with the wall clock as "now".
pub async fn run_command(config: Config, command: Command) -> Result<CommandOutput> {
    run_command_at(config, command, Local::now().naive_local()).await
}

/// Runs `command` with an explicit "now" for the schedule lookup.
pub async fn run_command_at(
    config: Config,
    command: Command,
    now: NaiveDateTime,
) -> Result<CommandOutput> {
    let ctx = AppContext::new(config)?;
    match command {
        Command::Search {
            location,
            features,
            limit,
            radius,
        } => {
            let filter = VenueFilter::with_features(features.features());
            search(&ctx, &location.join(" "), &filter, limit, radius).await
        }
        Command::List {
            features,
            name,
            venue_type,
        } => {
            let filter = VenueFilter {
                name,
                venue_type,
                ..VenueFilter::with_features(features.features())
            };
            list(&ctx, &filter).await
        }
        Command::Details { venue_name } => details(&ctx, &venue_name.join(" ")).await,
        Command::Schedule { day } => schedule(&ctx, day.as_deref(), now).await,
        Command::Update => update(&ctx).await,
    }
}
