//! Dataset retrieval from a URL or a local path.

use std::path::Path;
use std::time::Duration;

use crate::error_handling::DataError;

/// Returns true if `source` should be fetched over HTTP.
pub(crate) fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches the raw GeoJSON text from `source`.
///
/// `http(s)://` sources are requested with `client`; anything else is read as
/// a local file path.
pub(crate) async fn fetch_source(
    client: &reqwest::Client,
    source: &str,
    timeout: Duration,
) -> Result<String, DataError> {
    if !is_remote(source) {
        log::debug!("Reading dataset from local path: {}", source);
        return tokio::fs::read_to_string(source)
            .await
            .map_err(|e| DataError::io(Path::new(source), e));
    }

    log::debug!("Fetching dataset from: {}", source);
    let request_error = |e| DataError::Request {
        url: source.to_string(),
        source: e,
    };
    let response = client
        .get(source)
        .timeout(timeout)
        .send()
        .await
        .map_err(request_error)?;

    if !response.status().is_success() {
        return Err(DataError::Status {
            url: source.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(request_error)
}
