//! Export the trend series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::{CarAttributes, TrendPoint};
use crate::error::AppError;

/// Write one row per trend point.
pub fn write_trend_csv(path: &Path, attrs: &CarAttributes, trend: &[TrendPoint]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create trend CSV '{}': {e}", path.display())))?;

    writeln!(file, "index,month,price,make,model,variant,year")
        .map_err(|e| AppError::input(format!("Failed to write trend CSV header: {e}")))?;

    for (idx, point) in trend.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            idx,
            point.label,
            point.price,
            csv_field(&attrs.make),
            csv_field(&attrs.model),
            csv_field(&attrs.variant),
            attrs.year,
        )
        .map_err(|e| AppError::input(format!("Failed to write trend CSV row: {e}")))?;
    }

    info!(path = %path.display(), rows = trend.len(), "wrote trend CSV");
    Ok(())
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModificationStatus;

    #[test]
    fn trend_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.csv");
        let attrs = CarAttributes {
            make: "MG".to_string(),
            model: "HS".to_string(),
            variant: "Essence, 1.5T".to_string(),
            year: 2024,
            mileage: 0,
            transmission: None,
            fuel_type: None,
            engine_capacity: None,
            is_accidental: false,
            modification_status: ModificationStatus::Stock,
            interior_condition: String::new(),
            exterior_condition: String::new(),
        };
        let trend = vec![
            TrendPoint { label: "Sep".to_string(), price: 6_900_000 },
            TrendPoint { label: "Oct".to_string(), price: 7_000_000 },
        ];

        write_trend_csv(&path, &attrs, &trend).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "index,month,price,make,model,variant,year");
        assert_eq!(lines[2], "1,Oct,7000000,MG,HS,\"Essence, 1.5T\",2024");
    }
}
