/// Cached HTTP fetching
///
/// One `Fetcher` wraps a shared `reqwest` client and a cache directory.
/// A fetch writes the body to the cache only on a success status; anything
/// else is reported as a skip, not an error. Transport failures surface as
/// errors so the caller decides whether they abort a batch.

use crate::domain::validation::require_non_empty;
use crate::shared::error::ShowcaseError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What happened to one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchOutcome {
    /// Body written to the cache
    Saved { path: PathBuf, bytes: usize },

    /// Non-success status; nothing written
    Skipped { status: u16 },
}

/// HTTP fetcher with a file cache
pub struct Fetcher {
    client: reqwest::Client,
    cache_dir: PathBuf,
}

impl Fetcher {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, ShowcaseError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            cache_dir: cache_dir.into(),
        })
    }

    /// Where a URL's body lands in the cache
    pub fn cache_path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(sanitize_file_name(url))
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Fetches one URL and caches the body on a success status.
    ///
    /// # Returns
    /// * `Ok(FetchOutcome::Saved)` when the body was written
    /// * `Ok(FetchOutcome::Skipped)` on a non-success status
    /// * `Err(_)` on transport or filesystem failure
    pub async fn fetch_to_cache(&self, url: &str) -> Result<FetchOutcome, ShowcaseError> {
        let url = require_non_empty(url, "url")?;
        fs::create_dir_all(&self.cache_dir).await?;

        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            let path = self.cache_path(url);
            fs::write(&path, &body).await?;
            tracing::debug!(url, bytes = body.len(), path = %path.display(), "cached");
            Ok(FetchOutcome::Saved {
                path,
                bytes: body.len(),
            })
        } else {
            tracing::warn!(url, status = status.as_u16(), "skipping cache write");
            Ok(FetchOutcome::Skipped {
                status: status.as_u16(),
            })
        }
    }
}

/// Flattens a URL into a single cache file name
fn sanitize_file_name(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_flattens_separators() {
        assert_eq!(
            sanitize_file_name("https://example.com/a/b"),
            "https___example_com_a_b"
        );
    }

    #[test]
    fn test_cache_path_stays_inside_cache_dir() {
        let fetcher = Fetcher::new("/tmp/http_cache").unwrap();
        let path = fetcher.cache_path("https://example.com/../../etc/passwd");
        assert!(path.starts_with("/tmp/http_cache"));
        assert!(!path.to_string_lossy().contains(".."));
    }

    #[test]
    fn test_distinct_urls_get_distinct_files() {
        let fetcher = Fetcher::new("/tmp/http_cache").unwrap();
        assert_ne!(
            fetcher.cache_path("https://example.com"),
            fetcher.cache_path("https://example.org")
        );
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected_before_any_io() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(dir.path()).unwrap();
        let err = fetcher.fetch_to_cache("  ").await.unwrap_err();
        assert!(matches!(err, ShowcaseError::Argument(_)));
        // The rejected call must not have created the cache directory contents
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
