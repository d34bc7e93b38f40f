//! Dataset cache operations.
//!
//! The cache is a single file holding the raw GeoJSON of the last successful
//! fetch. Freshness is judged by the file's modification time.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs;

use crate::error_handling::DataError;

/// Reads the cached GeoJSON text.
///
/// With `max_age` set, a cache older than that is reported as
/// `DataError::CacheExpired`; with `None` any age is accepted.
pub(crate) async fn read_cache(path: &Path, max_age: Option<Duration>) -> Result<String, DataError> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DataError::CacheMissing {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(DataError::io(path, e)),
    };

    if let Some(max_age) = max_age {
        // An mtime in the future (clock skew) counts as fresh.
        let age = metadata
            .modified()
            .map_err(|e| DataError::io(path, e))?
            .elapsed()
            .unwrap_or_default();
        if age > max_age {
            log::debug!(
                "Cache at {} is {}h old (max {}h)",
                path.display(),
                age.as_secs() / 3600,
                max_age.as_secs() / 3600
            );
            return Err(DataError::CacheExpired);
        }
    }

    fs::read_to_string(path)
        .await
        .map_err(|e| DataError::io(path, e))
}

/// Replaces the cache file with `contents`.
///
/// Writes to a sibling temp file and renames it over the cache, so readers
/// see either the old dataset or the new one, never a partial write.
pub(crate) async fn write_cache(path: &Path, contents: &str) -> Result<(), DataError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| DataError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, contents)
        .await
        .map_err(|e| DataError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(DataError::io(path, e));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "fishfry".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_cache_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fishfry.geojson");

        let result = read_cache(&path, None).await;
        assert!(matches!(result, Err(DataError::CacheMissing { .. })));
    }

    #[tokio::test]
    async fn test_write_then_read_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("fishfry.geojson");

        write_cache(&path, "{\"features\": []}").await.unwrap();
        let text = read_cache(&path, Some(Duration::from_secs(60))).await.unwrap();
        assert_eq!(text, "{\"features\": []}");

        // No temp files left next to the cache
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_write_cache_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fishfry.geojson");

        write_cache(&path, "old").await.unwrap();
        write_cache(&path, "new").await.unwrap();
        assert_eq!(read_cache(&path, None).await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_read_cache_expired() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fishfry.geojson");
        std::fs::write(&path, "{}").unwrap();

        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(8 * 24 * 60 * 60))
            .unwrap();

        let result = read_cache(&path, Some(Duration::from_secs(7 * 24 * 60 * 60))).await;
        assert!(matches!(result, Err(DataError::CacheExpired)));

        // Stale fallback ignores age
        assert_eq!(read_cache(&path, None).await.unwrap(), "{}");
    }
}
