/// Timeout-bounded waiting and periodic ticking
///
/// The bounded wait starts an operation that would take far longer than the
/// timeout allows; giving up is the expected outcome, not a failure. The
/// periodic tick loop is bounded here by the configured tick count (the
/// `metronome` binary runs it unbounded).

use crate::application::demos::{Demo, DemoOutcome};
use crate::application::runner::RunnerConfig;
use crate::shared::error::ShowcaseError;
use async_trait::async_trait;
use tokio::time::{self, Instant};

pub struct TimersDemo;

#[async_trait]
impl Demo for TimersDemo {
    fn name(&self) -> &'static str {
        "timers"
    }

    fn summary(&self) -> &'static str {
        "timeout-bounded waiting and periodic ticking"
    }

    async fn run(&self, config: &RunnerConfig) -> Result<DemoOutcome, ShowcaseError> {
        // Bounded wait over a deliberately long operation
        let very_long_operation = time::sleep(config.long_operation);
        match time::timeout(config.wait_timeout, very_long_operation).await {
            Ok(()) => println!("long operation finished in time"),
            Err(_elapsed) => {
                tracing::warn!(timeout = ?config.wait_timeout, "bounded wait gave up");
                println!("gave up waiting after {:?}", config.wait_timeout);
                // Output: gave up waiting after 1s
            }
        }

        // Periodic ticking; the first tick fires one full period in
        let start = Instant::now() + config.tick_interval;
        let mut ticker = time::interval_at(start, config.tick_interval);
        for _ in 0..config.ticks {
            ticker.tick().await;
            println!("plonk");
        }

        Ok(DemoOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn quick_config() -> RunnerConfig {
        RunnerConfig {
            ticks: 2,
            tick_interval: Duration::from_millis(2),
            wait_timeout: Duration::from_millis(5),
            long_operation: Duration::from_millis(100),
            ..RunnerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_bounded_wait_gives_up_without_error() {
        let outcome = TimersDemo.run(&quick_config()).await.unwrap();
        assert_eq!(outcome, DemoOutcome::Completed);
    }

    #[tokio::test]
    async fn test_short_operation_finishes_in_time() {
        let config = RunnerConfig {
            long_operation: Duration::from_millis(1),
            wait_timeout: Duration::from_millis(200),
            ..quick_config()
        };
        let outcome = TimersDemo.run(&config).await.unwrap();
        assert_eq!(outcome, DemoOutcome::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_take_one_period_each() {
        let config = quick_config();
        let started = Instant::now();
        TimersDemo.run(&config).await.unwrap();

        // Bounded wait burns the timeout, then each tick burns one period
        let expected = config.wait_timeout + config.tick_interval * config.ticks;
        assert_eq!(started.elapsed(), expected);
    }
}
