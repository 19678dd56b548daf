// ABOUTME: routine-cli - command-line front end for the trainer routine builder
// ABOUTME: Suggests pyramid weights, previews and submits drafts, manages the default percent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Suggest weights for a 12-10-8-8-6 pyramid starting at 20 kg, +10% per series
//! routine-cli suggest --base 20 --percent 10
//!
//! # Show the payload a draft would be submitted as
//! routine-cli preview --draft push-day.json
//!
//! # Submit a draft to the routine creation API
//! routine-cli submit --draft push-day.json
//!
//! # Read or change a trainer's default percent increment
//! routine-cli percent get --trainer 6f1c2a7e-0d4b-4f57-9d55-1f6a8f0b1c2d
//! routine-cli percent set --trainer 6f1c2a7e-0d4b-4f57-9d55-1f6a8f0b1c2d --value 5
//! routine-cli percent presets --trainer 6f1c2a7e-0d4b-4f57-9d55-1f6a8f0b1c2d
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use trainer_routines::{
    config::BuilderConfig,
    errors::AppResult,
    http_client::initialize_shared_client,
    intelligence::RoundingMode,
    logging::LoggingConfig,
    routines::RoutineApiClient,
    settings::TrainerSettings,
};
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "routine-cli",
    about = "Trainer routine builder CLI",
    long_about = "Suggest pyramidal weight progressions, preview and submit routine drafts, and manage a trainer's default percent increment."
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
    /// Suggest weights for all five pyramid series
    Suggest {
        /// Weight of the first series ("20", "20,5", "42.5kg")
        #[arg(long)]
        base: String,

        /// Percent increment per series (presets: 5, 7.5, 10)
        #[arg(long, default_value = "7.5", allow_negative_numbers = true)]
        percent: f64,

        /// Rounding convention (`half_up`, `half_away_from_zero`, `half_even`)
        #[arg(long)]
        rounding: Option<RoundingMode>,
    },

    /// Print the payload a draft file would be submitted as
    Preview {
        /// Routine draft JSON file
        #[arg(long)]
        draft: PathBuf,
    },

    /// Submit a draft file to the routine creation API
    Submit {
        /// Routine draft JSON file
        #[arg(long)]
        draft: PathBuf,
    },

    /// Trainer default percent management
    Percent {
        #[command(subcommand)]
        action: PercentCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PercentCommand {
    /// Print the reconciled default percent
    Get {
        /// Trainer id
        #[arg(long)]
        trainer: Uuid,
    },

    /// Store a new default percent locally and remotely
    Set {
        /// Trainer id
        #[arg(long)]
        trainer: Uuid,

        /// New default percent
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
    },

    /// List the preset increments, marking the trainer's default if given
    Presets {
        /// Trainer id
        #[arg(long)]
        trainer: Option<Uuid>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = BuilderConfig::from_env()?;
    initialize_shared_client(config.api.timeout_secs, config.api.connect_timeout_secs);
    debug!("{}", config.summary());

    match cli.command {
        Command::Suggest {
            base,
            percent,
            rounding,
        } => commands::suggest::run(&base, percent, rounding, config.weights)?,
        Command::Preview { draft } => commands::draft::preview(&draft, config.weights).await?,
        Command::Submit { draft } => {
            let client = RoutineApiClient::from_config(&config.api);
            commands::draft::submit(&draft, config.weights, &client).await?;
        }
        Command::Percent { action } => {
            let settings = TrainerSettings::from_config(&config);
            match action {
                PercentCommand::Get { trainer } => commands::percent::get(&settings, trainer).await,
                PercentCommand::Set { trainer, value } => {
                    commands::percent::set(&settings, trainer, value).await?;
                }
                PercentCommand::Presets { trainer } => {
                    commands::percent::presets(&settings, trainer).await;
                }
            }
        }
    }

    Ok(())
}
