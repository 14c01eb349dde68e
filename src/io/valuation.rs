//! Read/write valuation JSON files.
//!
//! A valuation file is the portable record of one run: the car as entered, the
//! catalog base price, the estimate, the trend series that was shown and the
//! breakdown lines. `carval show` renders it again without recomputing.
//!
//! The schema is defined by `domain::ValuationFile`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::ValuationFile;
use crate::error::AppError;

/// Name recorded in the `tool` field.
pub const TOOL_NAME: &str = "carval";

/// Write a valuation JSON file.
pub fn write_valuation_json(path: &Path, valuation: &ValuationFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create valuation JSON '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, valuation)
        .map_err(|e| AppError::input(format!("Failed to write valuation JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to write valuation JSON: {e}")))?;

    info!(path = %path.display(), "wrote valuation JSON");
    Ok(())
}

/// Read a valuation JSON file.
pub fn read_valuation_json(path: &Path) -> Result<ValuationFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open valuation JSON '{}': {e}", path.display())))?;
    let valuation: ValuationFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid valuation JSON: {e}")))?;
    Ok(valuation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::{
        BreakdownLine, CarAttributes, FuelType, Impact, ModificationStatus, PriceEstimate, TrendPoint, Transmission,
    };

    fn sample() -> ValuationFile {
        ValuationFile {
            tool: TOOL_NAME.to_string(),
            as_of: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            attributes: CarAttributes {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                variant: "Altis 1.6".to_string(),
                year: 2022,
                mileage: 60_000,
                transmission: Some(Transmission::Automatic),
                fuel_type: Some(FuelType::Petrol),
                engine_capacity: Some(1600),
                is_accidental: false,
                modification_status: ModificationStatus::Stock,
                interior_condition: "Clean".to_string(),
                exterior_condition: "Good".to_string(),
            },
            base_price: Some(4_500_000),
            estimate: PriceEstimate {
                min: 2_940_000,
                max: 3_450_000,
                suggested: 3_200_000,
                confidence: 75.5,
            },
            trend: vec![TrendPoint {
                label: "Oct".to_string(),
                price: 3_200_000,
            }],
            breakdown: vec![BreakdownLine {
                label: "Base Market Value".to_string(),
                amount: 4_500_000,
                impact: Impact::Neutral,
            }],
        }
    }

    #[test]
    fn write_then_read_preserves_valuation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valuation.json");
        let original = sample();

        write_valuation_json(&path, &original).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"basePrice\": 4500000"));
        assert!(text.contains("\"asOf\": \"2026-10-18\""));

        let back = read_valuation_json(&path).unwrap();
        assert_eq!(back.attributes, original.attributes);
        assert_eq!(back.estimate, original.estimate);
        assert_eq!(back.trend, original.trend);
        assert_eq!(back.breakdown, original.breakdown);
    }

    #[test]
    fn invalid_json_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_valuation_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = read_valuation_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
