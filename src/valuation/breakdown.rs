//! Itemized breakdown shown under the estimate.
//!
//! These lines are presentation heuristics: apart from the base price and the
//! depreciation share they use fixed amounts and do not sum to the estimate.

use crate::domain::{BreakdownLine, CarAttributes, Impact, PriceEstimate, Transmission};

/// Share of the total drop from list price attributed to age.
const AGE_SHARE: f64 = 0.6;
const HIGH_MILEAGE_KM: u64 = 50_000;
const HIGH_MILEAGE_AMOUNT: i64 = -50_000;
const LOW_MILEAGE_AMOUNT: i64 = 30_000;
const ACCIDENT_AMOUNT: i64 = -200_000;
const CLEAN_HISTORY_AMOUNT: i64 = 50_000;
const AUTOMATIC_PREMIUM: i64 = 100_000;

fn line(label: &str, amount: i64, impact: Impact) -> BreakdownLine {
    BreakdownLine {
        label: label.to_string(),
        amount,
        impact,
    }
}

pub fn price_breakdown(attrs: &CarAttributes, base_price: u64, estimate: &PriceEstimate) -> Vec<BreakdownLine> {
    let drop = base_price as f64 - estimate.suggested as f64;
    let age_amount = (-drop * AGE_SHARE).trunc() as i64;

    let (mileage_amount, mileage_impact) = if attrs.mileage > HIGH_MILEAGE_KM {
        (HIGH_MILEAGE_AMOUNT, Impact::Negative)
    } else {
        (LOW_MILEAGE_AMOUNT, Impact::Positive)
    };

    let (condition_amount, condition_impact) = if attrs.is_accidental {
        (ACCIDENT_AMOUNT, Impact::Negative)
    } else {
        (CLEAN_HISTORY_AMOUNT, Impact::Positive)
    };

    // Only a conventional automatic earns the premium here; CVT does not.
    let (gearbox_amount, gearbox_impact) = if attrs.transmission == Some(Transmission::Automatic) {
        (AUTOMATIC_PREMIUM, Impact::Positive)
    } else {
        (0, Impact::Neutral)
    };

    vec![
        line("Base Market Value", base_price as i64, Impact::Neutral),
        line("Age Depreciation", age_amount, Impact::Negative),
        line("Mileage Adjustment", mileage_amount, mileage_impact),
        line("Condition Assessment", condition_amount, condition_impact),
        line("Transmission Premium", gearbox_amount, gearbox_impact),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FuelType, ModificationStatus};

    fn attrs(mileage: u64, accidental: bool, transmission: Transmission) -> CarAttributes {
        CarAttributes {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            variant: "Oriel 1.5T".to_string(),
            year: 2020,
            mileage,
            transmission: Some(transmission),
            fuel_type: Some(FuelType::Petrol),
            engine_capacity: None,
            is_accidental: accidental,
            modification_status: ModificationStatus::Stock,
            interior_condition: String::new(),
            exterior_condition: String::new(),
        }
    }

    fn est(suggested: u64) -> PriceEstimate {
        PriceEstimate {
            min: suggested,
            max: suggested,
            suggested,
            confidence: 75.0,
        }
    }

    #[test]
    fn clean_low_mileage_automatic() {
        let lines = price_breakdown(&attrs(30_000, false, Transmission::Automatic), 7_200_000, &est(5_200_000));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].amount, 7_200_000);
        assert_eq!(lines[1].amount, -1_200_000);
        assert_eq!(lines[1].impact, Impact::Negative);
        assert_eq!((lines[2].amount, lines[2].impact), (30_000, Impact::Positive));
        assert_eq!((lines[3].amount, lines[3].impact), (50_000, Impact::Positive));
        assert_eq!((lines[4].amount, lines[4].impact), (100_000, Impact::Positive));
    }

    #[test]
    fn accidental_high_mileage_cvt() {
        let lines = price_breakdown(&attrs(50_001, true, Transmission::Cvt), 7_200_000, &est(4_000_000));
        assert_eq!((lines[2].amount, lines[2].impact), (-50_000, Impact::Negative));
        assert_eq!((lines[3].amount, lines[3].impact), (-200_000, Impact::Negative));
        assert_eq!((lines[4].amount, lines[4].impact), (0, Impact::Neutral));
    }

    #[test]
    fn exactly_fifty_thousand_km_is_not_high() {
        let lines = price_breakdown(&attrs(50_000, false, Transmission::Manual), 7_200_000, &est(6_000_000));
        assert_eq!(lines[2].impact, Impact::Positive);
    }
}
