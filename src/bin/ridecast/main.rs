// ABOUTME: Ridecast CLI - riding-condition outlooks from forecast snapshots
// ABOUTME: Scores ad-hoc observations and prints full outlooks as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full outlook for a normalized forecast document
//! ridecast outlook forecast.json
//!
//! # Same outlook as JSON
//! ridecast outlook forecast.json --format json
//!
//! # Score a single observation
//! ridecast score --temperature 22 --wind 12 --precipitation 0 --visibility 10
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use ridecast::config::AppConfig;
use ridecast::errors::AppResult;
use ridecast::intelligence::{RidingAnalyzer, RidingConfig};
use ridecast::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "ridecast",
    about = "Motorcycle riding-condition forecasts",
    long_about = "Scores weather observations for motorcycle riding and finds the best safe riding window in a forecast."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the ride outlook for a forecast document
    Outlook {
        /// Path to the forecast document (JSON)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Score a single observation given in canonical units
    Score {
        /// Air temperature in Celsius
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,

        /// Wind speed in km/h
        #[arg(long)]
        wind: f64,

        /// Precipitation chance percentage
        #[arg(long)]
        precipitation: f64,

        /// Visibility in kilometers (omit if unknown)
        #[arg(long)]
        visibility: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let app_config = AppConfig::from_env()?;
    let riding_config = RidingConfig::load()?;
    debug!(
        environment = %app_config.environment,
        log_level = %app_config.log_level,
        cache_ttl_minutes = app_config.cache.ttl_minutes,
        "configuration loaded"
    );
    let analyzer = RidingAnalyzer::with_config(riding_config);

    match cli.command {
        Command::Outlook { file, format } => {
            commands::outlook::run(&analyzer, &app_config, &file, format).await
        }
        Command::Score {
            temperature,
            wind,
            precipitation,
            visibility,
            format,
        } => commands::score::run(
            &analyzer,
            commands::score::ScoreArgs {
                temperature,
                wind,
                precipitation,
                visibility,
            },
            format,
        ),
    }
}
