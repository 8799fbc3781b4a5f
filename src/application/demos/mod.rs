/// Demonstration modules
///
/// Each demonstration is isolated: it reads its knobs from `RunnerConfig`,
/// prints its illustrative output, and shares no state with the others.
/// All of them sit behind the `Demo` trait so the runner can treat them
/// uniformly.

use crate::application::runner::RunnerConfig;
use crate::shared::error::ShowcaseError;
use async_trait::async_trait;

pub mod dates;
pub mod downloads;
pub mod numerics;
pub mod queries;
pub mod timers;

pub use dates::DatesDemo;
pub use downloads::DownloadsDemo;
pub use numerics::NumericsDemo;
pub use queries::QueriesDemo;
pub use timers::TimersDemo;

/// How a demo ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoOutcome {
    Completed,

    /// Deliberately not run, with the reason
    Skipped(&'static str),
}

/// A runnable, self-contained demonstration
#[async_trait]
pub trait Demo: Send + Sync {
    /// Stable name used for CLI selection and reporting
    fn name(&self) -> &'static str;

    /// One-line description for `--list` and run headers
    fn summary(&self) -> &'static str;

    async fn run(&self, config: &RunnerConfig) -> Result<DemoOutcome, ShowcaseError>;
}

/// All demos, in execution order
pub fn registry() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(QueriesDemo),
        Box::new(DatesDemo),
        Box::new(TimersDemo),
        Box::new(DownloadsDemo),
        Box::new(NumericsDemo),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let demos = registry();
        let mut names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), demos.len());
    }

    #[test]
    fn test_every_demo_has_a_summary() {
        for demo in registry() {
            assert!(!demo.summary().is_empty(), "{} has no summary", demo.name());
        }
    }
}
