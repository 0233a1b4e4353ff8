use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use al_cli::commands::{extrapolate, interactive, report};
use al_cli::{Cli, Commands, Config};

/// Load configuration for commands that need it.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Report {
            social,
            sleep,
            work,
            json,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            report::run(
                &mut std::io::stdout().lock(),
                &config,
                *social,
                *sleep,
                *work,
                *json,
            )?;
        }
        Some(Commands::Extrapolate {
            hours,
            horizon,
            json,
        }) => {
            extrapolate::run(
                &mut std::io::stdout().lock(),
                *hours,
                horizon.as_deref(),
                *json,
            )?;
        }
        Some(Commands::Interactive) => {
            let config = load_config(cli.config.as_deref())?;
            interactive::run(
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
                &config,
            )?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
