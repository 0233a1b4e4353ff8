//! Report command: day distribution plus long-term social media view.
//!
//! This module implements `al report` with human-readable and JSON
//! output, and is reused by `al interactive` for its final rendering.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use al_core::{
    DayDistribution, Extrapolation, HOURS_PER_DAY, Horizon, Hours, compute_day_distribution,
    extrapolate_time,
};

use crate::Config;
use crate::commands::extrapolate::horizon_line;

/// Computed report data.
#[derive(Debug)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub distribution: DayDistribution,
    pub extrapolation: Extrapolation,
    pub recommended_sleep_hours: f64,
}

// ========== Day Bar ==========

const BAR_WIDTH: usize = 24;

/// Renders the day as a 24-character stacked bar, one character per hour.
///
/// Overbooked days scale by the reported total instead of 24, so the
/// bar always stays 24 characters wide.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn day_bar(distribution: &DayDistribution) -> String {
    let scale = distribution.total_used.max(HOURS_PER_DAY);

    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    let mut used = 0;
    for (glyph, hours) in [
        ('█', distribution.sleep),
        ('▓', distribution.social),
        ('▒', distribution.work),
    ] {
        let width = ((hours / scale) * BAR_WIDTH as f64).round() as usize;
        let width = width.min(BAR_WIDTH - used);
        for _ in 0..width {
            bar.push(glyph);
        }
        used += width;
    }
    for _ in used..BAR_WIDTH {
        bar.push('░');
    }
    bar
}

// ========== Report Generation ==========

/// Formats the human-readable report output.
pub fn format_report(data: &ReportData) -> String {
    let mut output = String::new();
    let distribution = &data.distribution;

    writeln!(output, "DAY DISTRIBUTION").unwrap();
    writeln!(output, "{}", "─".repeat(16)).unwrap();
    for (label, hours) in [
        ("Sleep", distribution.sleep),
        ("Social", distribution.social),
        ("Work/study", distribution.work),
        ("Free", distribution.free),
    ] {
        let percent = hours / HOURS_PER_DAY * 100.0;
        writeln!(output, "{label:<12}{hours:.2} h  ({percent:.1}%)").unwrap();
    }
    writeln!(output).unwrap();
    writeln!(output, "[{}]", day_bar(distribution)).unwrap();

    if distribution.is_overbooked() {
        writeln!(output).unwrap();
        writeln!(
            output,
            "Warning: you are reporting more than 24 hours of activities in a single day."
        )
        .unwrap();
        writeln!(output, "This suggests some of your estimates are inconsistent.").unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "SOCIAL MEDIA, LONG TERM").unwrap();
    writeln!(output, "{}", "─".repeat(23)).unwrap();
    for horizon in Horizon::ALL {
        writeln!(output, "{}", horizon_line(horizon, &data.extrapolation)).unwrap();
    }

    writeln!(output).unwrap();
    if distribution.sleep < data.recommended_sleep_hours {
        writeln!(
            output,
            "You sleep less than {} hours per day. Lack of sleep erodes focus as well, \
             together with social media overload.",
            data.recommended_sleep_hours
        )
        .unwrap();
    } else {
        writeln!(
            output,
            "Your reported sleep time is within a commonly recommended range (>= {} hours).",
            data.recommended_sleep_hours
        )
        .unwrap();
    }

    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub overbooked: bool,
    pub distribution: DayDistribution,
    pub extrapolation: Extrapolation,
}

/// Formats report data as JSON.
pub fn format_report_json(data: &ReportData) -> Result<String> {
    let report = JsonReport {
        generated_at: data.generated_at.to_rfc3339(),
        overbooked: data.distribution.is_overbooked(),
        distribution: data.distribution,
        extrapolation: data.extrapolation,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Command Entry ==========

/// Runs the report command from raw flag values.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    social: f64,
    sleep: f64,
    work: Option<f64>,
    json: bool,
) -> Result<()> {
    let social = Hours::new(social).context("invalid social media hours")?;
    let sleep = Hours::new(sleep).context("invalid sleep hours")?;
    let work = match work {
        Some(value) => Hours::new(value).context("invalid work hours")?,
        None => Hours::new(config.default_work_hours)
            .context("invalid default_work_hours in configuration")?,
    };

    render(writer, config, social, sleep, work, json)
}

/// Renders the report for already-validated inputs.
pub(crate) fn render<W: Write>(
    writer: &mut W,
    config: &Config,
    social: Hours,
    sleep: Hours,
    work: Hours,
    json: bool,
) -> Result<()> {
    let distribution = compute_day_distribution(social, sleep, Some(work));
    let extrapolation = extrapolate_time(social);
    tracing::debug!(?distribution, ?extrapolation, "computed report records");

    let data = ReportData {
        generated_at: Utc::now(),
        distribution,
        extrapolation,
        recommended_sleep_hours: config.recommended_sleep_hours,
    };

    if json {
        writeln!(writer, "{}", format_report_json(&data)?)?;
    } else {
        write!(writer, "{}", format_report(&data))?;
    }

    Ok(())
}
