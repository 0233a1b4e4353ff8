//! Extrapolate command: project a daily hour figure across horizons.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use al_core::{Extrapolation, Horizon, Hours, extrapolate_time, format_number};

/// One rendered line of the projection table.
pub(crate) fn horizon_line(horizon: Horizon, extrapolation: &Extrapolation) -> String {
    let label = match horizon {
        Horizon::Day => "Per day:",
        Horizon::Week => "Per week:",
        Horizon::Month => "Per month:",
        Horizon::Year => "Per year:",
        Horizon::TenYear => "Per ten years:",
    };
    let (hours, days) = extrapolation.span(horizon);
    match days {
        Some(days) => format!(
            "{label:<15}{} h  (~{} full days)",
            format_number(hours),
            format_number(days)
        ),
        None => format!("{label:<15}{} h", format_number(hours)),
    }
}

/// JSON shape for a single selected horizon.
#[derive(Debug, Serialize)]
struct JsonSpan {
    horizon: &'static str,
    hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<f64>,
}

/// Runs the extrapolate command.
pub fn run<W: Write>(writer: &mut W, hours: f64, horizon: Option<&str>, json: bool) -> Result<()> {
    let hours = Hours::new(hours).context("invalid daily hours")?;
    let horizon = horizon
        .map(str::parse::<Horizon>)
        .transpose()
        .context("invalid --horizon value")?;

    let extrapolation = extrapolate_time(hours);
    tracing::debug!(?extrapolation, "computed extrapolation");

    if json {
        let output = match horizon {
            Some(selected) => {
                let (hours, days) = extrapolation.span(selected);
                serde_json::to_string_pretty(&JsonSpan {
                    horizon: selected.as_str(),
                    hours,
                    days,
                })?
            }
            None => serde_json::to_string_pretty(&extrapolation)?,
        };
        writeln!(writer, "{output}")?;
    } else {
        match horizon {
            Some(selected) => writeln!(writer, "{}", horizon_line(selected, &extrapolation))?,
            None => {
                for each in Horizon::ALL {
                    writeln!(writer, "{}", horizon_line(each, &extrapolation))?;
                }
            }
        }
    }

    Ok(())
}
