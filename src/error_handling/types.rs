//! Error type definitions.
//!
//! This module defines the error types used throughout the application, one
//! enum per concern.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading the venue dataset.
#[derive(Error, Debug)]
pub enum DataError {
    /// The request to the data source could not be completed.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The data source answered with a non-success status.
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// A local file (data source or cache) could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON.
    #[error("Invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is JSON but not a feature collection.
    #[error("Payload is not a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    /// No cache file exists at the configured path.
    #[error("Cache not found at {}", path.display())]
    CacheMissing { path: PathBuf },

    /// The cache file is older than the configured maximum age.
    #[error("Cache expired")]
    CacheExpired,

    /// Neither the data source nor the cache could provide data.
    #[error("No fish fry data available: {reason}")]
    Unavailable { reason: String },
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error types for external geocoding.
///
/// The geocoder treats all of these as "location not found"; they exist so the
/// reason can be logged.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The geocoder URL could not be built.
    #[error("Invalid geocoder URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request failed before a response was received.
    #[error("Geocoder request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The geocoder answered with a non-success status.
    #[error("Geocoder returned HTTP {0}")]
    Status(StatusCode),

    /// The response body could not be parsed.
    #[error("Invalid geocoder response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response carried coordinates that are not numbers in range.
    #[error("Invalid coordinate in geocoder response: {0}")]
    InvalidCoordinate(String),
}

/// Error types for interpreting schedule queries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// The day argument is neither a weekday, a relative day nor an ISO date.
    #[error("Could not parse date: {0}")]
    UnrecognizedDay(String),
}
