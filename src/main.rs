mod cli;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use config::ConfigError;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use validator::{Validate, ValidationErrors};

use cli::{Cli, Command};
use provador_algo::config::{LogFormat, LoggingSettings, Settings};
use provador_algo::core::SizeMatcher;
use provador_algo::models::{ChartError, FitResponse, RecommendationResponse, SizeChart, UserBasicData, UserMeasurements};
use provador_algo::session::{SessionError, TryOnSession};

#[derive(Debug, Error)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("Invalid size chart {}: {source}", .path.display())]
    Chart { path: PathBuf, source: ChartError },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    debug!("Configuration loaded: {:?}", settings);

    let pretty = cli.pretty || settings.output.pretty;
    match run(cli.command, pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the JSON result
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

fn run(command: Command, pretty: bool) -> Result<(), AppError> {
    match command {
        Command::Estimate { input } => {
            let data: UserBasicData = read_json(&input)?;
            let estimated = TryOnSession::new().submit_basic_data(data)?;
            info!("Estimated measurements from {}", input.display());
            print_json(&estimated, pretty)
        }
        Command::Recommend { measurements, chart } => {
            let measurements: UserMeasurements = read_json(&measurements)?;
            measurements.validate()?;
            let chart = read_chart(&chart)?;

            let recommendation = SizeMatcher::with_default_weights().recommend(&measurements, &chart);
            log_outcome(recommendation.as_ref().map(|r| r.size.as_str()), &chart);
            print_json(&RecommendationResponse::from(recommendation), pretty)
        }
        Command::Fit { input, chart, measurements: adjusted } => {
            let data: UserBasicData = read_json(&input)?;
            let chart = read_chart(&chart)?;

            let mut session = TryOnSession::new();
            let mut measurements = session.submit_basic_data(data)?;
            if let Some(path) = adjusted {
                measurements = read_json(&path)?;
                session.adjust_measurements(measurements)?;
            }
            let recommendation = session.recommend(&chart)?.cloned();
            log_outcome(recommendation.as_ref().map(|r| r.size.as_str()), &chart);

            print_json(
                &FitResponse {
                    measurements,
                    result: RecommendationResponse::from(recommendation),
                },
                pretty,
            )
        }
    }
}

fn log_outcome(size: Option<&str>, chart: &SizeChart) {
    match size {
        Some(size) => info!("Recommended size {} out of {} sizes", size, chart.len()),
        None => info!("No size could be determined from {} sizes", chart.len()),
    }
}

fn read_input(path: &Path) -> Result<String, AppError> {
    let read = if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = read_input(path)?;
    serde_json::from_str(&text).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_chart(path: &Path) -> Result<SizeChart, AppError> {
    let text = read_input(path)?;
    SizeChart::from_json(&text).map_err(|source| AppError::Chart {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
