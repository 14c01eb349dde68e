//! Shared valuation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! catalog lookup -> estimate -> trend -> breakdown
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::catalog;
use crate::domain::{
    BreakdownLine, CarAttributes, PriceEstimate, TrendPoint, ValuationConfig, ValuationFile,
};
use crate::io::valuation::TOOL_NAME;
use crate::valuation::{estimate, price_breakdown, synthesize};

/// All computed outputs of a single valuation.
#[derive(Debug, Clone)]
pub struct ValuationRun {
    pub as_of: NaiveDate,
    pub attributes: CarAttributes,
    /// `None` when the catalog has no entry for the car.
    pub base_price: Option<u64>,
    pub estimate: PriceEstimate,
    pub trend: Vec<TrendPoint>,
    pub breakdown: Vec<BreakdownLine>,
}

impl ValuationRun {
    /// Snapshot for `--export` / `carval show`.
    pub fn to_file(&self) -> ValuationFile {
        ValuationFile {
            tool: TOOL_NAME.to_string(),
            as_of: self.as_of,
            attributes: self.attributes.clone(),
            base_price: self.base_price,
            estimate: self.estimate,
            trend: self.trend.clone(),
            breakdown: self.breakdown.clone(),
        }
    }
}

/// Value a car. Never fails: a catalog miss yields a run without a base price.
pub fn run_valuation(attributes: CarAttributes, config: &ValuationConfig) -> ValuationRun {
    let mut rng = match config.trend_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_valuation_with_rng(attributes, config.as_of, &mut rng)
}

/// Same as [`run_valuation`] with a caller-owned RNG.
///
/// The TUI keeps one RNG across re-rolls so each `r` draws a fresh series.
pub fn run_valuation_with_rng(attributes: CarAttributes, as_of: NaiveDate, rng: &mut StdRng) -> ValuationRun {
    let base_price = catalog::lookup(&attributes.make, &attributes.model, &attributes.variant);
    if base_price.is_none() {
        warn!(
            make = %attributes.make,
            model = %attributes.model,
            variant = %attributes.variant,
            "no catalog entry; valuation has no market data"
        );
    }
    let base = base_price.unwrap_or(0);

    let estimate = estimate(&attributes, base, as_of.year());
    let trend = synthesize(estimate.suggested, as_of, rng);
    let breakdown = price_breakdown(&attributes, base, &estimate);

    debug!(
        car = %attributes.display_name(),
        base,
        suggested = estimate.suggested,
        min = estimate.min,
        max = estimate.max,
        confidence = estimate.confidence,
        "valuation complete"
    );

    ValuationRun {
        as_of,
        attributes,
        base_price,
        estimate,
        trend,
        breakdown,
    }
}

/// Draw a new trend series for an existing run.
pub fn reroll_trend(run: &mut ValuationRun, rng: &mut StdRng) {
    run.trend = synthesize(run.estimate.suggested, run.as_of, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FuelType, ModificationStatus, Transmission};
    use crate::valuation::TREND_LEN;

    fn config(seed: Option<u64>) -> ValuationConfig {
        ValuationConfig {
            as_of: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            trend_seed: seed,
            plot: false,
            plot_width: 60,
            plot_height: 12,
            export_json: None,
            export_trend: None,
        }
    }

    fn corolla() -> CarAttributes {
        CarAttributes {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            variant: "Altis 1.6".to_string(),
            year: 2022,
            mileage: 60_000,
            transmission: Some(Transmission::Automatic),
            fuel_type: Some(FuelType::Petrol),
            engine_capacity: None,
            is_accidental: false,
            modification_status: ModificationStatus::Stock,
            interior_condition: String::new(),
            exterior_condition: String::new(),
        }
    }

    #[test]
    fn known_car_runs_end_to_end() {
        let run = run_valuation(corolla(), &config(Some(7)));
        assert_eq!(run.base_price, Some(4_500_000));
        assert!(run.estimate.has_data());
        assert!(run.estimate.min <= run.estimate.suggested && run.estimate.suggested <= run.estimate.max);
        assert_eq!(run.trend.len(), TREND_LEN);
        assert_eq!(run.trend.last().map(|p| p.price), Some(run.estimate.suggested));
        assert_eq!(run.trend.last().map(|p| p.label.as_str()), Some("Oct"));
        assert_eq!(run.breakdown.len(), 5);
    }

    #[test]
    fn same_seed_same_trend() {
        let a = run_valuation(corolla(), &config(Some(42)));
        let b = run_valuation(corolla(), &config(Some(42)));
        assert_eq!(a.trend, b.trend);
    }

    #[test]
    fn unknown_car_has_no_market_data() {
        let mut attrs = corolla();
        attrs.variant = "Imaginary".to_string();
        let run = run_valuation(attrs, &config(Some(1)));
        assert_eq!(run.base_price, None);
        assert!(!run.estimate.has_data());
        assert!(run.trend.iter().all(|p| p.price == 0));

        let file = run.to_file();
        assert_eq!(file.tool, "carval");
        assert_eq!(file.base_price, None);
    }

    #[test]
    fn reroll_keeps_anchor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut run = run_valuation_with_rng(corolla(), config(None).as_of, &mut rng);
        reroll_trend(&mut run, &mut rng);
        assert_eq!(run.trend.len(), TREND_LEN);
        assert_eq!(run.trend.last().map(|p| p.price), Some(run.estimate.suggested));
    }
}
