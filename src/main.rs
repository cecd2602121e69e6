//! Command line driver for the Glicko rating engine
//!
//! Reads a player and their contests for one rating period, runs the update
//! and prints the posterior rating as JSON. Persistence and period
//! scheduling stay with whatever invokes this binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glicko_engine::config::AppConfig;
use glicko_engine::rating::{GlickoCalculatorConfig, GlickoParameters, GlickoRatingCalculator};
use glicko_engine::{Contest, Rating, RatingCalculator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Glicko Engine - rating and deviation updates for one rating period
#[derive(Parser)]
#[command(name = "glicko-engine", version, about)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rate a player from a JSON file of contests
    Rate {
        /// JSON file with `player` and `contests`
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Parameter overrides: min_deviation,max_deviation,periods_elapsed,decay_constant
        #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
        params: Option<Vec<f64>>,
    },
    /// Apply idle periods to a rating
    Decay {
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        deviation: f64,
        #[arg(long, default_value_t = 1)]
        periods: u32,
    },
    /// Print the confidence interval of a rating
    Interval {
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        deviation: f64,
    },
}

/// One rating period for one player
#[derive(Debug, Deserialize)]
struct RatingRequest {
    player: Rating,
    #[serde(default)]
    contests: Vec<Contest>,
}

#[derive(Debug, Serialize)]
struct IntervalResponse {
    low: f64,
    high: f64,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    Ok(config)
}

fn build_calculator(
    config: &AppConfig,
    overrides: Option<&[f64]>,
) -> Result<GlickoRatingCalculator> {
    let mut calculator_config = GlickoCalculatorConfig::try_from(&config.rating)?;
    if let Some(overrides) = overrides {
        calculator_config.parameters = GlickoParameters::from_overrides(overrides)?;
    }
    Ok(GlickoRatingCalculator::new(calculator_config)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).context("Configuration error")?;
    init_logging(&config.service.log_level)?;
    debug!(service = %config.service.name, "Configuration loaded");

    match &args.command {
        Command::Rate { input, params } => {
            let calculator = build_calculator(&config, params.as_deref())?;
            let contents = std::fs::read_to_string(input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let request: RatingRequest = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", input.display()))?;

            let change = calculator.rate(&request.player, &request.contests)?;
            info!(
                contests = change.contests_played,
                rating_delta = change.rating_delta(),
                deviation_delta = change.deviation_delta(),
                "Rated player"
            );
            print_json(&change.new_rating)
        }
        Command::Decay {
            rating,
            deviation,
            periods,
        } => {
            let calculator = build_calculator(&config, None)?;
            let decayed = calculator.decay(&Rating::new(*rating, *deviation), *periods)?;
            print_json(&decayed)
        }
        Command::Interval { rating, deviation } => {
            let (low, high) = Rating::new(*rating, *deviation).confidence_interval();
            print_json(&IntervalResponse { low, high })
        }
    }
}
