//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - resolves the valuation date and seed
//! - runs the valuation pipeline
//! - prints reports/plots
//! - writes optional exports

use chrono::{Datelike, Local};
use clap::Parser;

use crate::cli::{CatalogArgs, Command, CommonArgs, EstimateArgs, QueryArgs, ShowArgs, TuiArgs};
use crate::domain::{CarAttributes, ModificationStatus, ValuationConfig, ValuationFile};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `carval` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    // We want `carval` and `carval --seed 3` to behave like `carval tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    if matches!(cli.command, Command::Tui(_)) {
        crate::logging::init_if_requested();
    } else {
        crate::logging::init();
    }

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Query(args) => handle_query(args),
        Command::Catalog(args) => handle_catalog(args),
        Command::Show(args) => handle_show(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = config_from_args(&args.common);
    let attributes = attributes_from_args(&args);
    value_and_report(attributes, &config)
}

fn handle_query(args: QueryArgs) -> Result<(), AppError> {
    let config = config_from_args(&args.common);
    let attributes = crate::io::query::attributes_from_query(&args.query, config.as_of.year());
    if attributes.make.is_empty() && attributes.model.is_empty() && attributes.variant.is_empty() {
        return Err(AppError::input(
            "Query string names no make, model or variant (expected e.g. \"make=Toyota&model=Corolla&variant=Altis+1.6\").",
        ));
    }
    value_and_report(attributes, &config)
}

fn handle_catalog(args: CatalogArgs) -> Result<(), AppError> {
    print!(
        "{}",
        crate::report::format_catalog(crate::catalog::makes(), args.make.as_deref(), args.model.as_deref())
    );
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let file = crate::io::valuation::read_valuation_json(&args.file)?;
    print_valuation(&file, !args.no_plot, args.width, args.height);
    Ok(())
}

fn handle_tui(args: TuiArgs) -> Result<(), AppError> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    crate::tui::run(as_of, args.seed)
}

fn value_and_report(attributes: CarAttributes, config: &ValuationConfig) -> Result<(), AppError> {
    let run = pipeline::run_valuation(attributes, config);
    let file = run.to_file();

    print_valuation(&file, config.plot, config.plot_width, config.plot_height);

    // Optional exports.
    if let Some(path) = &config.export_json {
        crate::io::valuation::write_valuation_json(path, &file)?;
        eprintln!("Wrote {}", path.display());
    }
    if let Some(path) = &config.export_trend {
        crate::io::export::write_trend_csv(path, &run.attributes, &run.trend)?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

fn print_valuation(file: &ValuationFile, plot: bool, width: usize, height: usize) {
    println!(
        "{}",
        crate::report::format_summary(&file.attributes, file.base_price, &file.estimate, file.as_of)
    );
    if file.base_price.is_none() {
        return;
    }
    println!("{}", crate::report::format_breakdown(&file.breakdown));
    println!("{}", crate::report::format_trend_table(&file.trend));
    if plot {
        println!("{}", crate::plot::render_trend_plot(&file.trend, width, height));
    }
}

pub fn config_from_args(args: &CommonArgs) -> ValuationConfig {
    ValuationConfig {
        as_of: args.as_of.unwrap_or_else(|| Local::now().date_naive()),
        trend_seed: args.seed,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_json: args.export.clone(),
        export_trend: args.export_trend.clone(),
    }
}

pub fn attributes_from_args(args: &EstimateArgs) -> CarAttributes {
    CarAttributes {
        make: args.make.clone(),
        model: args.model.clone(),
        variant: args.variant.clone(),
        year: args.year,
        mileage: args.mileage,
        transmission: args.transmission,
        fuel_type: args.fuel_type,
        engine_capacity: args.engine_capacity,
        is_accidental: args.accidental,
        modification_status: if args.modified {
            ModificationStatus::Modified
        } else {
            ModificationStatus::Stock
        },
        interior_condition: args.interior.clone(),
        exterior_condition: args.exterior.clone(),
    }
}

/// Rewrite argv so `carval` defaults to `carval tui`.
///
/// Rules:
/// - `carval`                        -> `carval tui`
/// - `carval --seed 3 ...`           -> `carval tui --seed 3 ...`
/// - `carval --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::cli::Cli;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(args(&["carval"])), args(&["carval", "tui"]));
        assert_eq!(
            rewrite_args(args(&["carval", "--seed", "3"])),
            args(&["carval", "tui", "--seed", "3"])
        );
        assert_eq!(rewrite_args(args(&["carval", "--help"])), args(&["carval", "--help"]));
        assert_eq!(
            rewrite_args(args(&["carval", "catalog", "--make", "KIA"])),
            args(&["carval", "catalog", "--make", "KIA"])
        );
    }

    #[test]
    fn estimate_flags_map_to_attributes_and_config() {
        let cli = Cli::try_parse_from([
            "carval",
            "estimate",
            "--make",
            "Suzuki",
            "--model",
            "Alto",
            "--variant",
            "VXL AGS",
            "--year",
            "2021",
            "--modified",
            "--interior",
            "Fabric seats fine",
            "--no-plot",
            "--as-of",
            "2026-01-31",
            "--export",
            "out.json",
        ])
        .unwrap();
        let Command::Estimate(est) = cli.command else {
            panic!("expected estimate");
        };

        let attrs = attributes_from_args(&est);
        assert_eq!(attrs.display_name(), "2021 Suzuki Alto VXL AGS");
        assert_eq!(attrs.modification_status, ModificationStatus::Modified);
        assert_eq!(attrs.transmission, None);
        assert_eq!(attrs.interior_condition, "Fabric seats fine");

        let config = config_from_args(&est.common);
        assert_eq!(config.as_of.year(), 2026);
        assert!(!config.plot);
        assert_eq!(config.export_json.as_deref(), Some(Path::new("out.json")));
        assert_eq!(config.export_trend, None);
    }
}
