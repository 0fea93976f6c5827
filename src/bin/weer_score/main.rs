// ABOUTME: weer-score CLI - scores activities for weather periods read as JSON
// ABOUTME: Handles single-period scoring, forecast ranking, label audits and config dumps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors
//!
//! Usage:
//! ```bash
//! # Score every activity for one period read from stdin
//! weer-score score < period.json
//!
//! # Score tennis and padel in Dutch
//! weer-score --locale nl-BE score --activity tennis --activity padel --input period.json
//!
//! # Rank activities for each day of a forecast
//! weer-score forecast --input week.json --top 3
//!
//! # Check a translated label table against the Dutch reference
//! weer-score audit-labels --table fr.json --strict
//!
//! # Print the effective thresholds
//! weer-score --config overrides.json config
//! ```

mod commands;
mod helpers;

use clap::{ArgAction, Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use weer_activity_score::{
    config::{log_scoring_summary, ScoringConfig},
    constants::env_config,
    errors::{AppResult, ErrorResponse},
    intelligence::{LabelCatalog, LabelResolver, LabelTable, Locale, ScoreEngine},
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "weer-score",
    version,
    about = "Activity suitability scoring for weather periods",
    long_about = "Scores outdoor activities from normalized weather metrics. Reads JSON, writes JSON to stdout and logs to stderr."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Scoring threshold overlay (JSON) used instead of WEER_SCORING_CONFIG_FILE; env overrides still apply
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Locale tag for reason labels (en, nl, de; region subtags accepted)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Custom label table (JSON map of reason keys); missing keys fall back to English
    #[arg(long, global = true)]
    labels: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score one weather period
    Score {
        /// Activity to score (repeatable); all activities when omitted
        #[arg(long = "activity", short = 'a')]
        activities: Vec<String>,

        /// Input file; stdin when omitted or "-"
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Score and rank activities for each day of a forecast
    Forecast {
        /// Activity to score (repeatable); all activities when omitted
        #[arg(long = "activity", short = 'a')]
        activities: Vec<String>,

        /// Input file holding an array of `{date, input}` days; stdin when omitted
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Keep only the best N activities per day
        #[arg(long)]
        top: Option<usize>,
    },

    /// Audit a translated label table against a built-in locale
    AuditLabels {
        /// Label table to check
        #[arg(long = "table")]
        table: PathBuf,

        /// Reference locale
        #[arg(long, default_value = "nl")]
        reference: String,

        /// Exit with an error when the audit finds anything
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective scoring configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let exit_code = error.exit_code();
            helpers::output::print_error(&ErrorResponse::from(error));
            ExitCode::from(exit_code as u8)
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = ScoringConfig::load_with_overlay(cli.config.as_deref())?;
    log_scoring_summary(&config);
    let engine = ScoreEngine::new(config);
    let labels = label_resolver(&cli)?;

    match cli.command {
        Command::Score { activities, input } => {
            commands::score::run(&engine, labels.as_ref(), &activities, input.as_deref())
        }
        Command::Forecast {
            activities,
            input,
            top,
        } => commands::forecast::run(
            &engine,
            labels.as_ref(),
            &activities,
            input.as_deref(),
            top,
        ),
        Command::AuditLabels {
            table,
            reference,
            strict,
        } => commands::audit::run(&table, &reference, strict),
        Command::Config => helpers::output::print_json(engine.config()),
    }
}

/// Custom table when given, else the built-in catalog for the requested locale
fn label_resolver(cli: &Cli) -> AppResult<Box<dyn LabelResolver>> {
    if let Some(path) = &cli.labels {
        info!(path = %path.display(), "Using custom label table");
        return Ok(Box::new(LabelTable::from_file(path)?));
    }

    let tag = cli
        .locale
        .clone()
        .or_else(|| env::var(env_config::LOCALE).ok())
        .unwrap_or_default();
    let catalog = LabelCatalog::for_locale(&tag);
    if !tag.is_empty() && Locale::from_tag(&tag).is_none() {
        info!(locale = %tag, "No built-in labels for locale, using English");
    }
    Ok(Box::new(catalog))
}
