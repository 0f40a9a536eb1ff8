use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropfit",
    version,
    about = "Rank crops by suitability for a weather forecast"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file, layered after cropfit.toml and .cropfit/local.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against a forecast and print the best crops
    Recommend(RecommendCommand),
    /// Sum the top-ten suitability scores per temperature category
    Categories(CategoriesCommand),
    /// Score a single crop and show its per-axis breakdown
    Score(ScoreCommand),
    /// List the crop catalog in effect
    Catalog(CatalogCommand),
    /// Load and validate configuration and catalog
    CheckConfig,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Forecast JSON file, or `-` for stdin
    pub forecast: PathBuf,
    /// Number of crops to return
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CategoriesCommand {
    /// Forecast JSON file, or `-` for stdin
    pub forecast: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Forecast JSON file, or `-` for stdin
    pub forecast: PathBuf,
    /// Crop name as listed in the catalog (case-insensitive)
    pub crop: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
