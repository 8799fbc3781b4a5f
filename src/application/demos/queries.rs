/// Collection query operators over the fixture flock
///
/// Counting without consuming, distinct-by, max-by, chunked pages,
/// find-or-fallback, zipping, and range-based slicing.

use crate::application::demos::{Demo, DemoOutcome};
use crate::application::runner::RunnerConfig;
use crate::domain::waterfowl::{
    all_but_last, distinct_by_cuteness, first_flying_cuter_than, most_cute, pages, sample_flock,
    with_families, FAMILIES,
};
use crate::shared::error::ShowcaseError;
use crate::shared::iter::known_len;
use async_trait::async_trait;

pub struct QueriesDemo;

#[async_trait]
impl Demo for QueriesDemo {
    fn name(&self) -> &'static str {
        "queries"
    }

    fn summary(&self) -> &'static str {
        "collection query operators over the flock"
    }

    async fn run(&self, _config: &RunnerConfig) -> Result<DemoOutcome, ShowcaseError> {
        let flock = sample_flock();

        // Length known without driving the iterator
        let words = ["all", " ", "my", " ", "ducklings"];
        if let Some(count) = known_len(&words.iter()) {
            println!("{count}");
            // Output: 5
        }

        let listing = distinct_by_cuteness(&flock)
            .iter()
            .map(|bird| format!("{}: {}", bird.name, bird.cuteness))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{listing}");
        // Output: Duck: 1, Penguin: 999, Gull: 0.1

        if let Some(bird) = most_cute(&flock) {
            println!("The most cute bird: {}", bird.name);
            // Output: The most cute bird: Penguin
        }

        for (index, birds) in pages(&flock, 2) {
            println!("Page {index}");
            for bird in birds {
                println!("{}", bird.name);
            }
        }
        /* Output:
         * Page 0
         * Duck
         * Penguin
         * Page 1
         * Gull
         * Goose */

        let impossible_bird = first_flying_cuter_than(&flock, 9000.0);
        println!("Fallback bird: {} ({})", impossible_bird.name, impossible_bird.cuteness);
        // Output: Fallback bird: Superpenguin (inf)

        for pair in with_families(&flock, &FAMILIES) {
            println!("{pair}");
        }
        /* Output:
         * Duck: Anatidae
         * Penguin: Spheniscidae
         * Gull: Larinae
         * Goose: Anserinae */

        let no_geese_please = all_but_last(&flock)
            .iter()
            .map(|bird| bird.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{no_geese_please}");
        // Output: Duck, Penguin, Gull

        Ok(DemoOutcome::Completed)
    }
}
