//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Attention ledger.
///
/// Turns reported daily hours into a day distribution and projects
/// social media time across week, month, year, and decade horizons.
#[derive(Debug, Parser)]
#[command(name = "al", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a report from reported hours.
    Report {
        /// Hours per day spent on social media.
        #[arg(long, allow_negative_numbers = true)]
        social: f64,

        /// Hours of sleep per day.
        #[arg(long, allow_negative_numbers = true)]
        sleep: f64,

        /// Hours of work or study per day (defaults to the configured value).
        #[arg(long, allow_negative_numbers = true)]
        work: Option<f64>,

        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Project a daily hour figure across longer horizons.
    Extrapolate {
        /// Hours per day to project.
        #[arg(long, allow_negative_numbers = true)]
        hours: f64,

        /// Limit output to one horizon (day, week, month, year, ten_year).
        #[arg(long)]
        horizon: Option<String>,

        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Answer three questions, get the full report.
    Interactive,
}
