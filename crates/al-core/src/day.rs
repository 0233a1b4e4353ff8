//! Day distribution: dividing a 24-hour day into reported categories.

use serde::{Deserialize, Serialize};

use crate::types::{HOURS_PER_DAY, Hours};

/// Hours of work or study assumed when the caller reports none.
pub const DEFAULT_WORK_HOURS: f64 = 8.0;

/// How a single day divides into sleep, social media, work, and free time.
///
/// All fields are hours. The reported categories pass through unchanged;
/// only `free` and `total_used` are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayDistribution {
    /// Hours of sleep, as reported.
    pub sleep: f64,
    /// Hours of social media use, as reported.
    pub social: f64,
    /// Hours of work or study, as reported or defaulted.
    pub work: f64,
    /// Hours left over: `max(0, 24 - total_used)`.
    pub free: f64,
    /// Sum of the three reported categories. May exceed 24.
    pub total_used: f64,
}

impl DayDistribution {
    /// Whether the reported categories add up to more than 24 hours.
    ///
    /// An overbooked day is a valid state. The values are kept as
    /// reported; surfacing a warning is the caller's job.
    #[must_use]
    pub const fn is_overbooked(&self) -> bool {
        self.total_used > HOURS_PER_DAY
    }
}

/// Computes how a day divides into the reported categories.
///
/// `work` defaults to [`DEFAULT_WORK_HOURS`] when `None`. Free time is
/// floored at zero; the category values are never redistributed, even
/// when their sum exceeds 24.
#[must_use]
pub fn compute_day_distribution(
    social: Hours,
    sleep: Hours,
    work: Option<Hours>,
) -> DayDistribution {
    let work = work.map_or(DEFAULT_WORK_HOURS, Hours::value);
    let total_used = social.value() + sleep.value() + work;
    let free = (HOURS_PER_DAY - total_used).max(0.0);

    DayDistribution {
        sleep: sleep.value(),
        social: social.value(),
        work,
        free,
        total_used,
    }
}
