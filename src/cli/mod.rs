//! Command-line parsing for the car valuation tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the valuation code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::{FuelType, Transmission};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "carval", version, about = "Used-car valuation (catalog-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Value a car described by flags; print summary, breakdown, trend and plot.
    Estimate(EstimateArgs),
    /// Value a car described by a results-page query string.
    Query(QueryArgs),
    /// List catalog makes, models and variants with base prices.
    Catalog(CatalogArgs),
    /// Re-render a previously exported valuation JSON.
    Show(ShowArgs),
    /// Launch the interactive TUI.
    ///
    /// Walks through the three-step evaluation wizard, then shows the results
    /// screen with a trend chart.
    Tui(TuiArgs),
}

/// Options shared by every command that runs a valuation.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// Valuation date (YYYY-MM-DD). Drives vehicle age and trend month labels.
    /// Defaults to today.
    #[arg(long = "as-of", env = "CARVAL_AS_OF", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Seed for the trend series. Without it each run draws a new series.
    #[arg(long, env = "CARVAL_SEED")]
    pub seed: Option<u64>,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,

    /// Export the valuation to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export the trend series to CSV.
    #[arg(long = "export-trend", value_name = "CSV")]
    pub export_trend: Option<PathBuf>,
}

/// The car, as flags.
#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    #[arg(long)]
    pub make: String,

    #[arg(long)]
    pub model: String,

    #[arg(long)]
    pub variant: String,

    /// Manufacturing year.
    #[arg(long)]
    pub year: i32,

    /// Odometer reading (km).
    #[arg(long, default_value_t = 0)]
    pub mileage: u64,

    #[arg(long, value_enum)]
    pub transmission: Option<Transmission>,

    #[arg(long = "fuel", value_enum)]
    pub fuel_type: Option<FuelType>,

    /// Engine displacement (cc).
    #[arg(long = "engine-cc")]
    pub engine_capacity: Option<u32>,

    /// The car has an accident history.
    #[arg(long)]
    pub accidental: bool,

    /// The car is modified (not stock).
    #[arg(long)]
    pub modified: bool,

    /// Interior condition description.
    #[arg(long, default_value = "")]
    pub interior: String,

    /// Exterior condition description.
    #[arg(long, default_value = "")]
    pub exterior: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Query string, e.g. "make=Toyota&model=Corolla&variant=Altis+1.6&year=2022".
    pub query: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct CatalogArgs {
    /// Only this make.
    #[arg(long)]
    pub make: Option<String>,

    /// Only this model.
    #[arg(long)]
    pub model: Option<String>,
}

/// Options for re-rendering a saved valuation.
#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Valuation JSON produced by `carval ... --export`.
    #[arg(long, value_name = "JSON")]
    pub file: PathBuf,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long = "as-of", env = "CARVAL_AS_OF", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Seed for the first trend series.
    #[arg(long, env = "CARVAL_SEED")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_estimate_flags() {
        let cli = Cli::try_parse_from([
            "carval",
            "estimate",
            "--make",
            "Toyota",
            "--model",
            "Corolla",
            "--variant",
            "Altis 1.6",
            "--year",
            "2022",
            "--mileage",
            "60000",
            "--transmission",
            "automatic",
            "--fuel",
            "petrol",
            "--accidental",
            "--as-of",
            "2026-10-18",
            "--seed",
            "5",
        ])
        .unwrap();

        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.variant, "Altis 1.6");
        assert_eq!(args.transmission, Some(Transmission::Automatic));
        assert_eq!(args.fuel_type, Some(FuelType::Petrol));
        assert!(args.accidental);
        assert!(!args.modified);
        assert_eq!(args.common.as_of, NaiveDate::from_ymd_opt(2026, 10, 18));
        assert_eq!(args.common.seed, Some(5));
    }

    #[test]
    fn rejects_bad_date() {
        let err = Cli::try_parse_from(["carval", "query", "make=X", "--as-of", "18/10/2026"]);
        assert!(err.is_err());
    }
}
