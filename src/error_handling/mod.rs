//! Error handling.
//!
//! Typed errors live here, one enum per concern:
//! - **Initialization**: logger and HTTP client setup
//! - **Data**: fetching, caching and parsing the venue dataset
//! - **Geocode**: external geocoder failures (logged, then treated as "not found")
//! - **Schedule**: day/date arguments that cannot be interpreted
//!
//! Command plumbing wraps these in `anyhow::Error` with context.

mod types;

// Re-export public API
pub use types::{DataError, GeocodeError, InitializationError, ScheduleError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_data_error_messages() {
        let err = DataError::CacheMissing {
            path: PathBuf::from("/tmp/fishfry.geojson"),
        };
        assert_eq!(err.to_string(), "Cache not found at /tmp/fishfry.geojson");

        let err = DataError::Unavailable {
            reason: "offline".to_string(),
        };
        assert!(err.to_string().contains("No fish fry data available"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = DataError::io(
            "missing.geojson",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.geojson"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_schedule_error_message() {
        let err = ScheduleError::UnrecognizedDay("someday".to_string());
        assert_eq!(err.to_string(), "Could not parse date: someday");
    }

    #[test]
    fn test_geocode_error_status() {
        let err = GeocodeError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("503"));
    }
}
