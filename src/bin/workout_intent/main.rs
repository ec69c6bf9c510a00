// ABOUTME: workout-intent CLI - classifies activities and derives athlete context from JSON files
// ABOUTME: Subcommands for single and batch classification, heart-rate zones and baselines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify one activity
//! workout-intent classify activity.json --pretty
//!
//! # Classify with personalized zones and baseline
//! workout-intent classify activity.json --context context.json
//!
//! # Reclassify a whole history file in parallel
//! workout-intent batch activities.json --context context.json
//!
//! # Heart-rate zones for an athlete
//! workout-intent zones --birth-date 1990-04-12 --resting-hr 52
//!
//! # Baseline from recent classified activities
//! workout-intent baseline history.json
//! ```

mod commands;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use workout_intent::errors::AppError;
use workout_intent::logging::LoggingConfig;
use workout_intent::ClassifierConfig;

#[derive(Parser)]
#[command(
    name = "workout-intent",
    about = "Workout intent classifier",
    long_about = "Infers the training purpose of completed running activities from their splits and laps."
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
    /// Classify a single activity
    Classify {
        /// Activity JSON file
        activity: PathBuf,

        /// Classification context JSON file (zones and baseline)
        #[arg(long)]
        context: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },

    /// Classify an array of activities in parallel
    Batch {
        /// JSON array of `{ "activity": ..., "context": ... }` entries
        activities: PathBuf,

        /// Context applied to entries without their own
        #[arg(long)]
        context: Option<PathBuf>,
    },

    /// Compute heart-rate zones from profile fields
    Zones {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<NaiveDate>,

        /// Measured maximum heart rate
        #[arg(long)]
        max_hr: Option<u32>,

        /// Resting heart rate
        #[arg(long)]
        resting_hr: Option<u32>,

        /// Reference date for the age calculation (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Estimate an athlete baseline from classified history
    Baseline {
        /// JSON array of historical activities
        history: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let config = ClassifierConfig::try_from_env()
        .map_err(|e| AppError::config(e.to_string()).with_source(e))
        .context("invalid classifier configuration")?;
    debug!(?config, "classifier configuration loaded");

    match command {
        Command::Classify {
            activity,
            context,
            pretty,
        } => commands::classify(config, &activity, context.as_deref(), pretty),
        Command::Batch {
            activities,
            context,
        } => commands::batch(config, &activities, context.as_deref()),
        Command::Zones {
            birth_date,
            max_hr,
            resting_hr,
            on,
        } => commands::zones(birth_date, max_hr, resting_hr, on),
        Command::Baseline { history } => commands::baseline(&history),
    }
}
