/// Parallel cached downloads
///
/// Fetches the configured URLs concurrently through the shared fetcher.
/// A transport failure on one URL never aborts the others; every outcome is
/// collected and summarized at the end.

use crate::application::demos::{Demo, DemoOutcome};
use crate::application::runner::RunnerConfig;
use crate::infrastructure::fetch::{FetchOutcome, Fetcher};
use crate::shared::error::ShowcaseError;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct DownloadsDemo;

/// Parallel fetch limit: one task per core by default, never more tasks
/// than URLs
fn effective_concurrency(configured: usize, url_count: usize) -> usize {
    let base = if configured == 0 {
        num_cpus::get()
    } else {
        configured
    };
    base.min(url_count).max(1)
}

#[async_trait]
impl Demo for DownloadsDemo {
    fn name(&self) -> &'static str {
        "downloads"
    }

    fn summary(&self) -> &'static str {
        "parallel fetching into the file cache"
    }

    async fn run(&self, config: &RunnerConfig) -> Result<DemoOutcome, ShowcaseError> {
        if config.offline {
            return Ok(DemoOutcome::Skipped("offline mode"));
        }
        if config.urls.is_empty() {
            return Ok(DemoOutcome::Skipped("no urls configured"));
        }

        let fetcher = Fetcher::new(config.cache_dir.clone())?;
        let limit = effective_concurrency(config.concurrency, config.urls.len());
        tracing::info!(limit, urls = config.urls.len(), "fetching in parallel");

        let outcomes = Arc::new(Mutex::new(Vec::with_capacity(config.urls.len())));

        stream::iter(config.urls.iter().cloned())
            .for_each_concurrent(limit, |url| {
                let fetcher = &fetcher;
                let outcomes = Arc::clone(&outcomes);
                async move {
                    let result = fetcher.fetch_to_cache(&url).await;
                    outcomes.lock().push((url, result));
                }
            })
            .await;

        for (url, result) in outcomes.lock().iter() {
            match result {
                Ok(FetchOutcome::Saved { path, bytes }) => {
                    println!("{url} -> {} ({bytes} bytes)", path.display());
                }
                Ok(FetchOutcome::Skipped { status }) => {
                    println!("{url} -> skipped (status {status})");
                }
                Err(error) => {
                    println!("{url} -> failed: {error}");
                }
            }
        }

        Ok(DemoOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_concurrency_auto_detects_cores() {
        let limit = effective_concurrency(0, 100);
        assert_eq!(limit, num_cpus::get().min(100));
    }

    #[test]
    fn test_effective_concurrency_never_exceeds_url_count() {
        assert_eq!(effective_concurrency(8, 3), 3);
    }

    #[test]
    fn test_effective_concurrency_is_at_least_one() {
        assert_eq!(effective_concurrency(1, 0), 1);
    }

    #[tokio::test]
    async fn test_offline_mode_skips() {
        let config = RunnerConfig {
            offline: true,
            ..RunnerConfig::default()
        };
        let outcome = DownloadsDemo.run(&config).await.unwrap();
        assert_eq!(outcome, DemoOutcome::Skipped("offline mode"));
    }

    #[tokio::test]
    async fn test_empty_url_list_skips() {
        let config = RunnerConfig {
            urls: Vec::new(),
            ..RunnerConfig::default()
        };
        let outcome = DownloadsDemo.run(&config).await.unwrap();
        assert_eq!(outcome, DemoOutcome::Skipped("no urls configured"));
    }

    #[tokio::test]
    async fn test_unreachable_host_does_not_fail_the_demo() {
        // Connection refused is a per-URL outcome, not a demo failure
        let dir = tempfile::tempdir().unwrap();
        let config = RunnerConfig {
            urls: vec!["http://127.0.0.1:1/nothing-listens-here".to_string()],
            cache_dir: dir.path().to_path_buf(),
            ..RunnerConfig::default()
        };
        let outcome = DownloadsDemo.run(&config).await.unwrap();
        assert_eq!(outcome, DemoOutcome::Completed);
    }
}
