use showcase::application::runner::{DemoRunner, DemoStatus, RunnerConfig};
use showcase::shared::error::ShowcaseError;
use std::time::Duration;

/// Millisecond-scale timings and no network so the whole suite runs fast
/// and deterministically
fn offline_config(cache_dir: std::path::PathBuf) -> RunnerConfig {
    RunnerConfig {
        ticks: 2,
        tick_interval: Duration::from_millis(5),
        wait_timeout: Duration::from_millis(10),
        long_operation: Duration::from_millis(200),
        cache_dir,
        offline: true,
        ..RunnerConfig::default()
    }
}

#[tokio::test]
async fn test_full_suite_offline() {
    let dir = tempfile::tempdir().unwrap();
    let runner = DemoRunner::new(offline_config(dir.path().to_path_buf()));

    let report = runner.run(&[]).await.unwrap();

    assert_eq!(report.records.len(), 5);
    assert_eq!(report.failed, 0);
    assert_eq!(report.status_of("queries"), Some(DemoStatus::Passed));
    assert_eq!(report.status_of("dates"), Some(DemoStatus::Passed));
    assert_eq!(report.status_of("timers"), Some(DemoStatus::Passed));
    assert_eq!(report.status_of("downloads"), Some(DemoStatus::Skipped));
    assert_eq!(report.status_of("numerics"), Some(DemoStatus::Passed));
    assert!(report.all_passed());

    // Nothing was fetched, so nothing was cached
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_subset_preserves_selection_order() {
    let dir = tempfile::tempdir().unwrap();
    let runner = DemoRunner::new(offline_config(dir.path().to_path_buf()));

    let names = vec!["numerics".to_string(), "queries".to_string()];
    let report = runner.run(&names).await.unwrap();

    // Selection order is the caller's, not the registry's
    let ran: Vec<&str> = report.records.iter().map(|r| r.name).collect();
    assert_eq!(ran, vec!["numerics", "queries"]);
    assert_eq!(report.passed, 2);
}

#[tokio::test]
async fn test_unknown_name_fails_the_whole_selection() {
    let dir = tempfile::tempdir().unwrap();
    let runner = DemoRunner::new(offline_config(dir.path().to_path_buf()));

    let names = vec!["queries".to_string(), "dances".to_string()];
    let result = runner.run(&names).await;

    match result {
        Err(ShowcaseError::UnknownDemo(name)) => assert_eq!(name, "dances"),
        other => panic!("expected UnknownDemo, got {other:?}"),
    }
}

#[tokio::test]
async fn test_report_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let runner = DemoRunner::new(offline_config(dir.path().to_path_buf()));

    let report = runner.run(&["dates".to_string()]).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["passed"], 1);
    assert_eq!(json["records"][0]["name"], "dates");
    assert_eq!(json["records"][0]["status"], "passed");
}
