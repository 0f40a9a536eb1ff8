mod catalog;
mod cli;
mod config;
mod error;
mod report;
mod score;
mod types;

use crate::catalog::Catalog;
use crate::error::CropfitError;
use crate::report::OutputFormat;
use crate::types::config::CropfitConfig;
use crate::types::report::{CatalogEntry, CategoryReport, RecommendationReport};
use crate::types::weather::{Forecast, WeatherAggregate};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn read_forecast(path: &Path) -> Result<Forecast, CropfitError> {
    let content = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        if !path.exists() {
            return Err(CropfitError::ForecastNotFound(path.display().to_string()));
        }
        std::fs::read_to_string(path)?
    };
    let forecast = Forecast::from_json(&content)?;
    tracing::info!(days = forecast.len(), source = %path.display(), "loaded forecast");
    Ok(forecast)
}

fn output_format(requested: Option<cli::ReportFormat>, config: &CropfitConfig) -> OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => config
            .default_format()
            .and_then(OutputFormat::parse)
            .unwrap_or(OutputFormat::Md),
    }
}

fn forecast_exit_code(forecast: &Forecast) -> i32 {
    if forecast.is_empty() {
        tracing::warn!("forecast contains no days; nothing to score");
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, CropfitError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cropfit starting");

    let config = config::load_config(Path::new("."), cli.config.as_deref())?;
    let catalog = Catalog::from_config(&config)?;

    match cli.command {
        cli::Commands::Recommend(cmd) => {
            let forecast = read_forecast(&cmd.forecast)?;
            let count = cmd
                .count
                .map(|count| count as usize)
                .unwrap_or_else(|| config.default_count());
            let recommendations = score::recommend(&catalog, &forecast, count);
            let report = RecommendationReport::new(
                WeatherAggregate::from_forecast(&forecast),
                recommendations,
            );
            let rendered =
                report::render_recommendations(&report, output_format(cmd.format, &config))?;
            println!("{rendered}");
            Ok(forecast_exit_code(&forecast))
        }
        cli::Commands::Categories(cmd) => {
            let forecast = read_forecast(&cmd.forecast)?;
            let report = CategoryReport::new(
                WeatherAggregate::from_forecast(&forecast),
                score::top_categories(&catalog, &forecast),
            );
            let rendered = report::render_categories(&report, output_format(cmd.format, &config))?;
            println!("{rendered}");
            Ok(forecast_exit_code(&forecast))
        }
        cli::Commands::Score(cmd) => {
            let crop = catalog
                .get(&cmd.crop)
                .ok_or_else(|| CropfitError::UnknownCrop(cmd.crop.clone()))?;
            let forecast = read_forecast(&cmd.forecast)?;
            let aggregate = WeatherAggregate::from_forecast(&forecast);
            let scored = aggregate
                .map(|weather| vec![score::score_crop(crop, &weather)])
                .unwrap_or_default();
            let report = RecommendationReport::new(aggregate, scored);
            let rendered =
                report::render_recommendations(&report, output_format(cmd.format, &config))?;
            println!("{rendered}");
            Ok(forecast_exit_code(&forecast))
        }
        cli::Commands::Catalog(cmd) => {
            let entries = catalog
                .crops()
                .iter()
                .map(CatalogEntry::from)
                .collect::<Vec<_>>();
            let rendered = report::render_catalog(&entries, output_format(cmd.format, &config))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::CheckConfig => {
            if catalog.is_empty() {
                return Err(CropfitError::InvalidCatalog(
                    "catalog contains no crops".to_string(),
                ));
            }
            println!(
                "config ok: {} crops, default count {}",
                catalog.len(),
                config.default_count()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
