// Shared test helpers for fixture datasets and command invocation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use serde_json::{json, Value};
use tempfile::TempDir;

use fishfry_finder::{run_command_at, Cli, CommandOutput, Config};

/// A small fish fry map covering the 2025 season.
///
/// Contains one unpublished venue and one venue without coordinates.
#[allow(dead_code)] // Used by other test files
pub fn fixture_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": 1,
                "geometry": { "type": "Point", "coordinates": [-80.0556, 40.6262] },
                "properties": {
                    "venue_name": "St. Alphonsus Church",
                    "venue_type": "Church",
                    "venue_address": "201 Church Rd, Wexford, PA 15090",
                    "phone": "724-935-1743",
                    "website": "https://stalphonsus.example.org",
                    "menu": { "text": "Baked cod, haluski, mac and cheese", "url": null },
                    "homemade_pierogies": true,
                    "handicap": true,
                    "alcohol": false,
                    "take_out": true,
                    "lunch": false,
                    "publish": true,
                    "events": [
                        { "dt_start": "2025-03-07T16:00:00", "dt_end": "2025-03-07T19:00:00" },
                        { "dt_start": "2025-03-14T16:00:00", "dt_end": "2025-03-14T19:00:00" }
                    ]
                }
            },
            {
                "type": "Feature",
                "id": 2,
                "geometry": { "type": "Point", "coordinates": [-80.0395, 40.3276] },
                "properties": {
                    "venue_name": "Bethel Park Volunteer Fire Department",
                    "venue_type": "Fire Department",
                    "venue_address": "5080 W Library Ave, Bethel Park, PA 15102",
                    "homemade_pierogies": false,
                    "handicap": false,
                    "alcohol": true,
                    "take_out": true,
                    "events": [
                        { "dt_start": "2025-03-14T11:00:00", "dt_end": "2025-03-14T19:00:00" }
                    ]
                }
            },
            {
                "type": "Feature",
                "id": 3,
                "geometry": { "type": "Point", "coordinates": [-79.9520, 40.4450] },
                "properties": {
                    "venue_name": "St. Paul Cathedral",
                    "venue_type": "Church",
                    "venue_address": "108 N Dithridge St, Pittsburgh, PA 15213",
                    "venue_notes": "Enter on Fifth Avenue",
                    "homemade_pierogies": true,
                    "handicap": true,
                    "alcohol": true,
                    "take_out": false,
                    "events": [
                        { "dt_start": "2025-03-07T16:30:00", "dt_end": "2025-03-07T19:30:00" }
                    ]
                }
            },
            {
                "type": "Feature",
                "id": 4,
                "geometry": { "type": "Point", "coordinates": [-79.9900, 40.4450] },
                "properties": {
                    "venue_name": "Hidden Fry",
                    "venue_type": "Restaurant",
                    "publish": false,
                    "events": [
                        { "dt_start": "2025-03-14T16:00:00", "dt_end": "2025-03-14T19:00:00" }
                    ]
                }
            },
            {
                "type": "Feature",
                "id": 5,
                "geometry": null,
                "properties": {
                    "venue_name": "Mystery Truck",
                    "venue_type": "Food Truck",
                    "lunch": true,
                    "events": [ { "dt_start": "2025-03-21T11:00:00" } ]
                }
            },
            {
                "type": "Feature",
                "id": 6,
                "geometry": { "type": "Point", "coordinates": [-79.9230, 40.4330] },
                "properties": {
                    "venue_name": "Squirrel Hill Community Fish Fry",
                    "venue_type": "Community Organization",
                    "venue_address": "5738 Forbes Ave, Pittsburgh, PA 15217",
                    "homemade_pierogies": true,
                    "handicap": false,
                    "take_out": true,
                    "events": [
                        { "dt_start": "2025-03-14T17:00:00", "dt_end": "2025-03-14T20:00:00" }
                    ]
                }
            }
        ]
    })
}

/// Writes `collection` to `source.geojson` inside `dir`.
#[allow(dead_code)] // Used by other test files
pub fn write_source(dir: &Path, collection: &Value) -> PathBuf {
    let path = dir.join("source.geojson");
    std::fs::write(&path, collection.to_string()).expect("Failed to write fixture");
    path
}

/// Cache path inside `temp_dir` (the directory does not exist yet).
#[allow(dead_code)] // Used by other test files
pub fn cache_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("cache").join("fishfrymap.geojson")
}

/// Config reading `source` with no external geocoder.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(temp_dir: &TempDir, source: &str) -> Config {
    Config {
        data_source: source.to_string(),
        cache_file: cache_path(temp_dir),
        geocoder_url: None,
        ..Default::default()
    }
}

/// Wednesday of the second week of Lent 2025, mid-morning.
#[allow(dead_code)] // Used by other test files
pub fn lent_wednesday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 12)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid timestamp")
}

/// Parses `args` as a `fishfry` command line pointed at the fixture source and
/// a cache inside `temp_dir`, then runs it at `now`.
#[allow(dead_code)] // Used by other test files
pub async fn run_cli(
    temp_dir: &TempDir,
    source: &str,
    args: &[&str],
    now: NaiveDateTime,
) -> anyhow::Result<CommandOutput> {
    let cache = cache_path(temp_dir);
    let mut argv = vec![
        "fishfry".to_string(),
        "--data-source".to_string(),
        source.to_string(),
        "--cache-file".to_string(),
        cache.to_string_lossy().to_string(),
        "--no-geocoder".to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));

    let cli = Cli::try_parse_from(argv).expect("Failed to parse test command line");
    run_command_at(cli.config(), cli.command, now).await
}
