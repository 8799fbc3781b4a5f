/// Static interface members on generic type parameters
///
/// `sum_all` compiles only for types carrying an additive identity and `+`;
/// `parse_all` only for types that declare how to construct themselves from
/// text. Both contracts are checked at compile time, no dispatch at runtime.

use crate::application::demos::{Demo, DemoOutcome};
use crate::application::runner::RunnerConfig;
use crate::domain::numeric::{sum_all, total_cuteness, Cuteness};
use crate::domain::parse::parse_all;
use crate::domain::waterfowl::{sample_flock, Waterfowl};
use crate::shared::error::ShowcaseError;
use async_trait::async_trait;

pub struct NumericsDemo;

#[async_trait]
impl Demo for NumericsDemo {
    fn name(&self) -> &'static str {
        "numerics"
    }

    fn summary(&self) -> &'static str {
        "generic folding and parsing via static trait members"
    }

    async fn run(&self, _config: &RunnerConfig) -> Result<DemoOutcome, ShowcaseError> {
        // Summing generically over plain integers
        println!("1 + 2 + 3 + 4 = {}", sum_all(&[1, 2, 3, 4]));
        // Output: 1 + 2 + 3 + 4 = 10

        let a_great_number = 1337i64;
        let b_great_number = 4242i64;
        let an_even_greater_number = sum_all(&[a_great_number, b_great_number]);
        println!("{a_great_number} + {b_great_number} = {an_even_greater_number}");
        // Output: 1337 + 4242 = 5579

        // The same fold over a domain newtype
        let flock = sample_flock();
        println!("Total flock cuteness: {}", total_cuteness(&flock));
        // Output: Total flock cuteness: 1001.1

        // Construction from text, resolved per type at compile time
        let scores: Vec<Cuteness> = parse_all(&["1", "999", "0.1"])?;
        println!("Parsed {} cuteness scores, summing to {}", scores.len(), sum_all(&scores));
        // Output: Parsed 3 cuteness scores, summing to 1000.1

        let hatchling: Waterfowl = "Duckling,true,false,false,2.5".parse()?;
        println!("Hatched {} with cuteness {}", hatchling.name, hatchling.cuteness);
        // Output: Hatched Duckling with cuteness 2.5

        Ok(DemoOutcome::Completed)
    }
}
