/// Wall-clock time arithmetic
///
/// Adding hours to a time of day wraps past midnight; callers that care get
/// the number of whole days wrapped along with the new time.

use chrono::{Duration, NaiveTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Adds `hours` to a time of day.
///
/// Returns the wrapped time and the number of whole days crossed, negative
/// when subtracting past the previous midnight.
pub fn add_hours(time: NaiveTime, hours: i64) -> (NaiveTime, i64) {
    let (wrapped, overflow_secs) = time.overflowing_add_signed(Duration::hours(hours));
    (wrapped, overflow_secs / SECONDS_PER_DAY)
}
