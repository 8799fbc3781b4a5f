/// Date and wall-clock time arithmetic
///
/// A fixed calendar date with its weekday, and time-of-day addition that
/// reports how many midnights it wrapped past.

use crate::application::demos::{Demo, DemoOutcome};
use crate::application::runner::RunnerConfig;
use crate::domain::dates::add_hours;
use crate::shared::error::ShowcaseError;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveTime};

pub struct DatesDemo;

#[async_trait]
impl Demo for DatesDemo {
    fn name(&self) -> &'static str {
        "dates"
    }

    fn summary(&self) -> &'static str {
        "calendar dates and wrapping time-of-day arithmetic"
    }

    async fn run(&self, _config: &RunnerConfig) -> Result<DemoOutcome, ShowcaseError> {
        let birthday = NaiveDate::from_ymd_opt(1995, 6, 14).unwrap();
        println!("Birthday: {} ({})", birthday, birthday.weekday());
        // Output: Birthday: 1995-06-14 (Wed)

        let party_time = NaiveTime::from_hms_opt(13, 33, 37).unwrap();

        let (later, days) = add_hours(party_time, 10);
        println!("{party_time} plus 10h is {later}, days wrapped: {days}");
        // Output: 13:33:37 plus 10h is 23:33:37, days wrapped: 0

        let (next_morning, days) = add_hours(party_time, 20);
        println!("{party_time} plus 20h is {next_morning}, days wrapped: {days}");
        // Output: 13:33:37 plus 20h is 09:33:37, days wrapped: 1

        Ok(DemoOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_is_a_wednesday() {
        let birthday = NaiveDate::from_ymd_opt(1995, 6, 14).unwrap();
        assert_eq!(birthday.weekday(), chrono::Weekday::Wed);
    }

    #[tokio::test]
    async fn test_dates_demo_completes() {
        let outcome = DatesDemo.run(&RunnerConfig::default()).await.unwrap();
        assert_eq!(outcome, DemoOutcome::Completed);
    }
}
