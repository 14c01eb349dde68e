//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built from CLI flags, the TUI wizard, or a results-page query string
//! - exported to JSON/CSV
//! - reloaded later for display

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Gearbox type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Transmission {
    Manual,
    Automatic,
    #[serde(rename = "CVT")]
    Cvt,
    #[serde(rename = "DCT")]
    Dct,
}

impl Transmission {
    pub const ALL: [Transmission; 4] = [
        Transmission::Manual,
        Transmission::Automatic,
        Transmission::Cvt,
        Transmission::Dct,
    ];

    /// Catalog label (also the query-string value).
    pub const fn label(self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
            Transmission::Cvt => "CVT",
            Transmission::Dct => "DCT",
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == s)
    }
}

/// Fuel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    #[serde(rename = "CNG")]
    Cng,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Electric,
        FuelType::Cng,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
            FuelType::Cng => "CNG",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == s)
    }
}

/// Whether the car is in factory configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationStatus {
    #[default]
    Stock,
    Modified,
}

impl ModificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ModificationStatus::Stock => "stock",
            ModificationStatus::Modified => "modified",
        }
    }

    /// `Modified` only for the exact value `"modified"`; everything else is stock.
    pub fn from_label(s: &str) -> Self {
        if s == "modified" {
            ModificationStatus::Modified
        } else {
            ModificationStatus::Stock
        }
    }
}

/// Everything the valuation needs to know about a car.
///
/// Built once from user input and never mutated afterwards; estimates are
/// recomputed from scratch whenever a new value is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarAttributes {
    pub make: String,
    pub model: String,
    pub variant: String,
    /// Calendar year of manufacture.
    pub year: i32,
    /// Odometer reading in kilometers.
    pub mileage: u64,
    /// `None` when the input named a gearbox outside the known set.
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    /// Engine displacement in cc (informational only).
    #[serde(default)]
    pub engine_capacity: Option<u32>,
    pub is_accidental: bool,
    pub modification_status: ModificationStatus,
    /// Free text. Only its length feeds the confidence score.
    pub interior_condition: String,
    pub exterior_condition: String,
}

impl CarAttributes {
    /// "2021 Toyota Corolla Altis 1.6" style title.
    pub fn display_name(&self) -> String {
        format!("{} {} {} {}", self.year, self.make, self.model, self.variant)
            .trim_end()
            .to_string()
    }
}

/// Estimated resale price band.
///
/// All prices are rounded to the nearest 10,000. When the catalog has no base
/// price for the car, `min`, `suggested` and `max` are all zero; check
/// [`PriceEstimate::has_data`] before showing a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: u64,
    pub max: u64,
    pub suggested: u64,
    /// Heuristic score in `[75, 95]` driven by how much condition detail was given.
    pub confidence: f64,
}

impl PriceEstimate {
    pub fn has_data(&self) -> bool {
        self.suggested > 0 || self.max > 0
    }
}

/// One point of the illustrative six-month price trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Three-letter month abbreviation ("Jan", "Feb", ...).
    pub label: String,
    pub price: u64,
}

/// Direction of a breakdown line on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

/// One row of the results-page price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    /// Signed amount in currency units.
    pub amount: i64,
    pub impact: Impact,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, environment and defaults.
#[derive(Debug, Clone)]
pub struct ValuationConfig {
    /// Valuation date. Its year drives the age computation and its month
    /// anchors the trend labels.
    pub as_of: NaiveDate,
    /// Fixed seed for the trend walk. `None` draws from OS entropy.
    pub trend_seed: Option<u64>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_json: Option<PathBuf>,
    pub export_trend: Option<PathBuf>,
}

/// A saved valuation (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationFile {
    pub tool: String,
    pub as_of: NaiveDate,
    pub attributes: CarAttributes,
    /// `None` when the catalog had no entry for the car.
    pub base_price: Option<u64>,
    pub estimate: PriceEstimate,
    pub trend: Vec<TrendPoint>,
    pub breakdown: Vec<BreakdownLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_exactly() {
        assert_eq!(Transmission::from_label("CVT"), Some(Transmission::Cvt));
        assert_eq!(Transmission::from_label("cvt"), None);
        assert_eq!(Transmission::from_label("AGS"), None);
        assert_eq!(FuelType::from_label("Hybrid"), Some(FuelType::Hybrid));
        assert_eq!(FuelType::from_label("CNG"), Some(FuelType::Cng));
        assert_eq!(ModificationStatus::from_label("modified"), ModificationStatus::Modified);
        assert_eq!(ModificationStatus::from_label("Modified"), ModificationStatus::Stock);
    }

    #[test]
    fn attributes_serialize_with_camel_case_and_labels() {
        let attrs = CarAttributes {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            variant: "Altis 1.6".to_string(),
            year: 2021,
            mileage: 60_000,
            transmission: Some(Transmission::Cvt),
            fuel_type: Some(FuelType::Cng),
            engine_capacity: None,
            is_accidental: false,
            modification_status: ModificationStatus::Stock,
            interior_condition: String::new(),
            exterior_condition: String::new(),
        };
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["fuelType"], "CNG");
        assert_eq!(json["transmission"], "CVT");
        assert_eq!(json["modificationStatus"], "stock");
        assert_eq!(json["isAccidental"], false);
        assert_eq!(attrs.display_name(), "2021 Toyota Corolla Altis 1.6");
    }

    #[test]
    fn zero_estimate_has_no_data() {
        let est = PriceEstimate { min: 0, max: 0, suggested: 0, confidence: 75.0 };
        assert!(!est.has_data());
    }
}
