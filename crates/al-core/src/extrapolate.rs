//! Extrapolation of daily social media time across longer horizons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{HOURS_PER_DAY, Hours};

/// Error type for unknown horizon names.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown horizon: {0}")]
pub struct UnknownHorizon(String);

/// Projection horizons for daily time figures.
///
/// The month is a flat 30-day approximation and the year ignores leap
/// days. The projections are meant to convey scale, not calendar math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    Day,
    Week,
    Month,
    Year,
    TenYear,
}

impl Horizon {
    /// All horizons in projection order.
    pub const ALL: [Self; 5] = [Self::Day, Self::Week, Self::Month, Self::Year, Self::TenYear];

    /// Number of days this horizon spans.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 30.0,
            Self::Year => 365.0,
            Self::TenYear => 3650.0,
        }
    }

    /// Canonical name, as used in serialized output and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::TenYear => "ten_year",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = UnknownHorizon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "ten_year" | "decade" => Ok(Self::TenYear),
            _ => Err(UnknownHorizon(s.to_string())),
        }
    }
}

/// Daily social media time projected across all horizons.
///
/// All fields are exact products of the input; nothing is rounded.
/// `day_hours` echoes the input and has no day-equivalent field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrapolation {
    /// The input: hours per day.
    pub day_hours: f64,
    /// Hours per week (input times 7).
    pub week_hours: f64,
    /// Weekly hours expressed as full 24-hour days.
    pub week_days: f64,
    /// Hours per 30-day month.
    pub month_hours: f64,
    /// Monthly hours expressed as full 24-hour days.
    pub month_days: f64,
    /// Hours per 365-day year.
    pub year_hours: f64,
    /// Yearly hours expressed as full 24-hour days.
    pub year_days: f64,
    /// Hours per decade (ten flat years).
    pub ten_year_hours: f64,
    /// Decade hours expressed as full 24-hour days.
    pub ten_year_days: f64,
}

impl Extrapolation {
    /// Hours and day-equivalent for a single horizon.
    ///
    /// [`Horizon::Day`] has no day-equivalent, so its second element
    /// is `None`.
    #[must_use]
    pub const fn span(&self, horizon: Horizon) -> (f64, Option<f64>) {
        match horizon {
            Horizon::Day => (self.day_hours, None),
            Horizon::Week => (self.week_hours, Some(self.week_days)),
            Horizon::Month => (self.month_hours, Some(self.month_days)),
            Horizon::Year => (self.year_hours, Some(self.year_days)),
            Horizon::TenYear => (self.ten_year_hours, Some(self.ten_year_days)),
        }
    }
}

fn hours_to_days(hours: f64) -> f64 {
    hours / HOURS_PER_DAY
}

/// Projects a daily hour figure across week, month, year, and decade.
#[must_use]
pub fn extrapolate_time(hours_per_day: Hours) -> Extrapolation {
    let day_hours = hours_per_day.value();
    let week_hours = day_hours * Horizon::Week.multiplier();
    let month_hours = day_hours * Horizon::Month.multiplier();
    let year_hours = day_hours * Horizon::Year.multiplier();
    let ten_year_hours = year_hours * 10.0;

    Extrapolation {
        day_hours,
        week_hours,
        week_days: hours_to_days(week_hours),
        month_hours,
        month_days: hours_to_days(month_hours),
        year_hours,
        year_days: hours_to_days(year_hours),
        ten_year_hours,
        ten_year_days: hours_to_days(ten_year_hours),
    }
}

#[cfg(test)]
#[expect(clippy::float_cmp, reason = "multipliers are exact in double precision")]
mod tests {
    use super::*;

    fn hours(value: f64) -> Hours {
        Hours::new(value).unwrap()
    }

    #[test]
    fn three_hours_per_day() {
        let result = extrapolate_time(hours(3.0));
        assert_eq!(result.day_hours, 3.0);
        assert_eq!(result.week_hours, 21.0);
        assert_eq!(result.month_hours, 90.0);
        assert_eq!(result.year_hours, 1095.0);
        assert_eq!(result.ten_year_hours, 10_950.0);
        assert_eq!(result.year_days, 45.625);
    }

    #[test]
    fn multiplier_identities() {
        let input = 1.5;
        let result = extrapolate_time(hours(input));
        assert_eq!(result.week_hours, input * 7.0);
        assert_eq!(result.month_hours, input * 30.0);
        assert_eq!(result.year_hours, input * 365.0);
        assert_eq!(result.ten_year_hours, input * 3650.0);
        assert_eq!(result.week_days, result.week_hours / 24.0);
        assert_eq!(result.month_days, result.month_hours / 24.0);
        assert_eq!(result.year_days, result.year_hours / 24.0);
        assert_eq!(result.ten_year_days, result.ten_year_hours / 24.0);
    }

    #[test]
    fn zero_input_yields_all_zeros() {
        let result = extrapolate_time(Hours::ZERO);
        assert_eq!(result.day_hours, 0.0);
        assert_eq!(result.week_hours, 0.0);
        assert_eq!(result.ten_year_days, 0.0);
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let a = extrapolate_time(hours(2.5));
        let b = extrapolate_time(hours(2.5));
        assert_eq!(a, b);
    }

    #[test]
    fn span_matches_fields() {
        let result = extrapolate_time(hours(3.0));
        assert_eq!(result.span(Horizon::Day), (3.0, None));
        assert_eq!(result.span(Horizon::Week), (21.0, Some(0.875)));
        assert_eq!(result.span(Horizon::Year), (1095.0, Some(45.625)));
    }

    #[test]
    fn horizon_roundtrip_all_variants() {
        for horizon in Horizon::ALL {
            let parsed: Horizon = horizon.as_str().parse().expect("should parse");
            assert_eq!(parsed, horizon, "roundtrip failed for {horizon:?}");
        }
    }

    #[test]
    fn decade_alias_parses() {
        let parsed: Horizon = "decade".parse().expect("should parse");
        assert_eq!(parsed, Horizon::TenYear);
    }

    #[test]
    fn unknown_horizon_errors() {
        let result: Result<Horizon, _> = "century".parse();
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown horizon: century");
    }

    #[test]
    fn serde_field_names() {
        let result = extrapolate_time(hours(3.0));
        let json = serde_json::to_value(result).unwrap();
        let object = json.as_object().unwrap();
        for field in [
            "day_hours",
            "week_hours",
            "week_days",
            "month_hours",
            "month_days",
            "year_hours",
            "year_days",
            "ten_year_hours",
            "ten_year_days",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert!(!object.contains_key("day_days"));
        assert_eq!(object.len(), 9);
    }
}
