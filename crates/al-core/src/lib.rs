//! Core domain logic for the attention ledger.
//!
//! This crate contains the fundamental types and logic for:
//! - Day distribution: dividing a 24-hour day into reported categories
//! - Extrapolation: projecting daily social media time across horizons
//! - Formatting: magnitude-aware rendering of numeric results

mod day;
mod extrapolate;
mod format;
pub mod types;

pub use day::{DEFAULT_WORK_HOURS, DayDistribution, compute_day_distribution};
pub use extrapolate::{Extrapolation, Horizon, UnknownHorizon, extrapolate_time};
pub use format::format_number;
pub use types::{HOURS_PER_DAY, Hours, HoursError};
