/// CLI Interface Module
///
/// Primary entry point of the executable.
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Initialize logging
/// - Configure and run the demo suite
/// - Render the run report and pick the exit code

use crate::application::runner::{DemoRunner, RunReport, RunnerConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Demo suite command-line configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "showcase")]
#[command(version = "0.1.0")]
#[command(about = "Console showcase of queries, time arithmetic, timers and parallel downloads", long_about = None)]
pub struct CliConfig {
    /// Demos to run (repeatable); all of them when omitted
    #[arg(short, long = "demo", value_name = "NAME")]
    pub demos: Vec<String>,

    /// List the demos and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Number of periodic ticks to emit
    #[arg(short, long, default_value_t = 3)]
    pub ticks: u32,

    /// Period between ticks in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub tick_interval_ms: u64,

    /// Bounded-wait timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub wait_timeout_ms: u64,

    /// Duration of the deliberately long operation in milliseconds
    #[arg(long, default_value_t = 100_000)]
    pub long_op_ms: u64,

    /// URLs for the download demo (repeatable); defaults built in
    #[arg(short, long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Download cache directory (default: the system temp dir)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Parallel fetch limit (0 = one per CPU core)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub concurrency: usize,

    /// Skip the download demo
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Report format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    pub report: String,

    /// Log level
    #[arg(short, long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,
}

impl CliConfig {
    /// Folds the CLI flags into the runner configuration
    fn to_runner_config(&self) -> RunnerConfig {
        let defaults = RunnerConfig::default();
        RunnerConfig {
            ticks: self.ticks,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            wait_timeout: Duration::from_millis(self.wait_timeout_ms),
            long_operation: Duration::from_millis(self.long_op_ms),
            urls: if self.urls.is_empty() {
                defaults.urls
            } else {
                self.urls.clone()
            },
            cache_dir: self.cache_dir.clone().unwrap_or(defaults.cache_dir),
            concurrency: self.concurrency,
            offline: self.offline,
        }
    }
}

/// Runs the CLI application
pub async fn run() -> ExitCode {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    tracing::info!("demo suite starting");
    tracing::debug!(?config, "parsed configuration");

    let runner = DemoRunner::new(config.to_runner_config());

    if config.list {
        for demo in runner.demos() {
            println!("{:<12} {}", demo.name(), demo.summary());
        }
        return ExitCode::SUCCESS;
    }

    println!("========================================");
    println!("  showcase v0.1.0");
    println!("========================================");
    println!("demos:        {}", selection_label(&config.demos));
    println!("ticks:        {} every {} ms", config.ticks, config.tick_interval_ms);
    println!("wait timeout: {} ms", config.wait_timeout_ms);
    println!("downloads:    {}", if config.offline { "offline" } else { "enabled" });
    println!("cache dir:    {}", runner.config().cache_dir.display());
    println!("========================================");

    match runner.run(&config.demos).await {
        Ok(report) => {
            render_report(&report, &config.report);
            if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            tracing::error!(%error, "suite did not run");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn selection_label(demos: &[String]) -> String {
    if demos.is_empty() {
        "all".to_string()
    } else {
        demos.join(", ")
    }
}

fn render_report(report: &RunReport, format: &str) {
    if format == "json" {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(error) => tracing::error!(%error, "could not serialize report"),
        }
        return;
    }

    println!("\n---- results ----");
    for record in &report.records {
        let detail = record.detail.as_deref().unwrap_or("");
        println!(
            "{:<12} {:<8} {:>6} ms  {}",
            record.name,
            format!("{:?}", record.status).to_lowercase(),
            record.duration_ms,
            detail
        );
    }
    println!(
        "{} passed, {} failed, {} skipped",
        report.passed, report.failed, report.skipped
    );
}

/// Initializes the logging system
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
