//! fishfry_finder library: Lenten fish fry lookup for the Pittsburgh area
//!
//! This library loads the Code for Pittsburgh fish fry map (a GeoJSON
//! FeatureCollection), resolves locations, ranks venues by distance, filters
//! them by amenities and answers "who is frying on this day" questions.
//!
//! # Example
//!
//! ```no_run
//! use fishfry_finder::{run_command, Command, Config};
//! use fishfry_finder::config::FeatureArgs;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     geocoder_url: None,
//!     ..Default::default()
//! };
//! let command = Command::Search {
//!     location: vec!["15217".to_string()],
//!     features: FeatureArgs {
//!         pierogies: true,
//!         ..Default::default()
//!     },
//!     limit: 5,
//!     radius: None,
//! };
//!
//! let output = run_command(config, command).await?;
//! println!("{}", output.text);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod commands;
pub mod config;
pub mod data;
pub mod distance;
pub mod error_handling;
pub mod filter;
pub mod geocode;
pub mod initialization;
pub mod models;
pub mod present;
pub mod schedule;
pub mod text;

// Re-export public API
pub use commands::{run_command, run_command_at, AppContext, CommandOutput, Outcome};
pub use config::{Cli, Command, Config, LogFormat, LogLevel, OutputFormat};
pub use data::{load_venues, DataOrigin, Dataset};
pub use error_handling::{DataError, GeocodeError, InitializationError, ScheduleError};
pub use geocode::{GeoLocation, Geocoder, LocationSource};
pub use models::{Event, Feature, GeoPoint, Venue, VenueType};
