/// Demo Runner - Configuration, Execution, Reporting
///
/// Runs the registered demonstrations in order and collects a per-demo
/// report. One demo failing never stops the rest; unknown demo names are
/// rejected before anything runs.

use crate::application::demos::{registry, Demo, DemoOutcome};
use crate::shared::error::ShowcaseError;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Knobs for the individual demonstrations
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Bounded ticks emitted by the periodic-timer demonstration
    pub ticks: u32,

    /// Period between ticks
    pub tick_interval: Duration,

    /// How long the bounded wait is willing to wait
    pub wait_timeout: Duration,

    /// How long the deliberately long operation would actually take
    pub long_operation: Duration,

    /// URLs fetched by the parallel-download demonstration
    pub urls: Vec<String>,

    /// Where fetched bodies are cached
    pub cache_dir: PathBuf,

    /// Parallel fetch limit; 0 means one per CPU core
    pub concurrency: usize,

    /// Skip the download demonstration entirely
    pub offline: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            ticks: 3,
            tick_interval: Duration::from_secs(1),
            wait_timeout: Duration::from_secs(1),
            long_operation: Duration::from_secs(100),
            urls: vec![
                "https://example.com".to_string(),
                "https://example.org".to_string(),
                "https://example.net".to_string(),
            ],
            cache_dir: env::temp_dir().join("http_cache"),
            concurrency: 0,
            offline: false,
        }
    }
}

/// How a single demo ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStatus {
    Passed,
    Failed,
    Skipped,
}

/// One line of the run report
#[derive(Debug, Clone, Serialize)]
pub struct DemoRecord {
    pub name: &'static str,
    pub status: DemoStatus,
    pub duration_ms: u64,

    /// Failure message or skip reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub records: Vec<DemoRecord>,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunReport {
    fn push(&mut self, record: DemoRecord) {
        match record.status {
            DemoStatus::Passed => self.passed += 1,
            DemoStatus::Failed => self.failed += 1,
            DemoStatus::Skipped => self.skipped += 1,
        }
        self.records.push(record);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Report status of a demo by name, if it ran
    pub fn status_of(&self, name: &str) -> Option<DemoStatus> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.status)
    }
}

/// Runs demonstrations and reports on them
pub struct DemoRunner {
    config: RunnerConfig,
    demos: Vec<Box<dyn Demo>>,
}

impl DemoRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            demos: registry(),
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Registered demos, in execution order
    pub fn demos(&self) -> &[Box<dyn Demo>] {
        &self.demos
    }

    /// Resolves a demo-name selection, rejecting unknown names.
    ///
    /// An empty selection means "all demos".
    fn select(&self, names: &[String]) -> Result<Vec<&dyn Demo>, ShowcaseError> {
        if names.is_empty() {
            return Ok(self.demos.iter().map(|demo| demo.as_ref()).collect());
        }

        names
            .iter()
            .map(|name| {
                self.demos
                    .iter()
                    .find(|demo| demo.name() == name)
                    .map(|demo| demo.as_ref())
                    .ok_or_else(|| ShowcaseError::UnknownDemo(name.clone()))
            })
            .collect()
    }

    /// Runs the selected demos (all of them for an empty selection).
    ///
    /// Demo failures are recorded, logged, and do not abort the run; only an
    /// invalid selection errors out, before anything has executed.
    pub async fn run(&self, names: &[String]) -> Result<RunReport, ShowcaseError> {
        let selected = self.select(names)?;
        let mut report = RunReport::default();

        for demo in selected {
            println!("\n== {}: {} ==", demo.name(), demo.summary());
            tracing::info!(demo = demo.name(), "starting");

            let started = Instant::now();
            let record = match demo.run(&self.config).await {
                Ok(DemoOutcome::Completed) => DemoRecord {
                    name: demo.name(),
                    status: DemoStatus::Passed,
                    duration_ms: started.elapsed().as_millis() as u64,
                    detail: None,
                },
                Ok(DemoOutcome::Skipped(reason)) => {
                    tracing::warn!(demo = demo.name(), reason, "skipped");
                    println!("(skipped: {reason})");
                    DemoRecord {
                        name: demo.name(),
                        status: DemoStatus::Skipped,
                        duration_ms: started.elapsed().as_millis() as u64,
                        detail: Some(reason.to_string()),
                    }
                }
                Err(error) => {
                    tracing::error!(demo = demo.name(), %error, "failed");
                    println!("(failed: {error})");
                    DemoRecord {
                        name: demo.name(),
                        status: DemoStatus::Failed,
                        duration_ms: started.elapsed().as_millis() as u64,
                        detail: Some(error.to_string()),
                    }
                }
            };

            tracing::info!(
                demo = record.name,
                status = ?record.status,
                duration_ms = record.duration_ms,
                "finished"
            );
            report.push(record);
        }

        Ok(report)
    }
}
