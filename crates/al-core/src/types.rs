//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a day in hours. Every distribution and day-equivalent
/// computation divides by this.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Validation errors for hour values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoursError {
    /// The value was NaN or infinite.
    #[error("hours must be a finite number, got {value}")]
    NotFinite { value: f64 },

    /// The value was below zero.
    #[error("hours cannot be negative, got {value}")]
    Negative { value: f64 },
}

/// A non-negative, finite number of hours.
///
/// There is deliberately no upper bound: a person can report more than
/// 24 hours of activities in a day, and the day distributor surfaces
/// that as an overbooked day rather than rejecting the input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Hours(f64);

impl Hours {
    /// Zero hours.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new hour value after validation.
    ///
    /// Returns an error if the value is NaN, infinite, or negative.
    pub fn new(value: f64) -> Result<Self, HoursError> {
        if !value.is_finite() {
            return Err(HoursError::NotFinite { value });
        }
        if value < 0.0 {
            return Err(HoursError::Negative { value });
        }
        Ok(Self(value))
    }

    /// Creates an hour value, coercing invalid input to zero.
    ///
    /// NaN, infinities, and negative values all become 0.0.
    #[must_use]
    pub const fn clamped(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    /// Returns the inner f64 value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Hours {
    type Error = HoursError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hours> for f64 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}
