//! Price estimation for a single car.
//!
//! The estimate is a closed-form product of four terms:
//!
//! ```text
//! adjusted = base_price × depreciation(age) × mileage_adjustment(km, age) × condition(attrs)
//! ```
//!
//! followed by a symmetric ±8% band and rounding to the nearest 10,000.
//!
//! Notes on the constants:
//! - Depreciation decelerates with age: the first year costs 15%, years two and
//!   three 8% each, years four and five 6% each, then 4% per year compounding.
//! - Mileage is compared against 15,000 km per year of age. Excess kilometers are
//!   penalized at 0.0005% each; a shortfall is rewarded at the gentler 0.0003%.
//!   The asymmetry is an empirical tuning choice, not derived from market data.
//! - Confidence only measures how much condition text was supplied.

use tracing::debug;

use crate::domain::{CarAttributes, FuelType, ModificationStatus, PriceEstimate, Transmission};

/// Kilometers a car is expected to cover per year of age.
pub const AVG_KM_PER_YEAR: u64 = 15_000;
/// Price reduction per kilometer above the expected mileage.
pub const OVER_MILEAGE_RATE: f64 = 0.000_005;
/// Price increase per kilometer below the expected mileage.
pub const UNDER_MILEAGE_RATE: f64 = 0.000_003;
/// Half-width of the min/max band relative to the adjusted price.
pub const RANGE_VARIANCE: f64 = 0.08;
/// Published prices are multiples of this step.
pub const PRICE_STEP: f64 = 10_000.0;

const ACCIDENT_FACTOR: f64 = 0.85;
const MODIFIED_FACTOR: f64 = 0.95;
const AUTOMATIC_FACTOR: f64 = 1.05;
const HYBRID_FACTOR: f64 = 1.08;
const DIESEL_FACTOR: f64 = 0.97;

const CONFIDENCE_BASE: f64 = 75.0;
const CONFIDENCE_CAP: f64 = 95.0;
/// UTF-16 code units of condition text per confidence point.
const CONFIDENCE_CHARS_PER_POINT: f64 = 20.0;

/// Named intermediate terms of one valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationFactors {
    pub age: u32,
    pub depreciation: f64,
    pub mileage: f64,
    pub condition: f64,
    /// `base_price × depreciation × mileage × condition`, before banding and rounding.
    pub adjusted: f64,
}

/// Whole years between the model year and `current_year`; future years count as 0.
pub fn vehicle_age(year: i32, current_year: i32) -> u32 {
    u32::try_from(current_year.saturating_sub(year)).unwrap_or(0)
}

/// Depreciation applied during the given year of ownership (0-based).
pub fn yearly_depreciation_rate(year_index: u32) -> f64 {
    match year_index {
        0 => 0.85,
        1..=2 => 0.92,
        3..=4 => 0.94,
        _ => 0.96,
    }
}

/// Cumulative depreciation after `age` whole years.
///
/// Compounding stops once the product underflows to zero, so absurd ages
/// (e.g. from a query year near `i32::MIN`) cost at most a few thousand steps.
pub fn depreciation_factor(age: u32) -> f64 {
    let mut factor = 1.0;
    for year_index in 0..age {
        if factor == 0.0 {
            break;
        }
        factor *= yearly_depreciation_rate(year_index);
    }
    factor
}

/// Multiplier for being over- or under-driven relative to the car's age.
///
/// The result is floored at zero so absurd odometer readings cannot produce a
/// negative price.
pub fn mileage_adjustment(mileage: u64, age: u32) -> f64 {
    let expected = age as f64 * AVG_KM_PER_YEAR as f64;
    let diff = mileage as f64 - expected;

    let factor = if diff > 0.0 {
        1.0 - diff * OVER_MILEAGE_RATE
    } else {
        1.0 + diff.abs() * UNDER_MILEAGE_RATE
    };
    factor.max(0.0)
}

/// Product of the accident, modification, gearbox and fuel adjustments.
pub fn condition_factor(attrs: &CarAttributes) -> f64 {
    let mut factor = 1.0;
    if attrs.is_accidental {
        factor *= ACCIDENT_FACTOR;
    }
    if attrs.modification_status == ModificationStatus::Modified {
        factor *= MODIFIED_FACTOR;
    }
    if matches!(attrs.transmission, Some(Transmission::Automatic | Transmission::Cvt)) {
        factor *= AUTOMATIC_FACTOR;
    }
    match attrs.fuel_type {
        Some(FuelType::Hybrid) => factor *= HYBRID_FACTOR,
        Some(FuelType::Diesel) => factor *= DIESEL_FACTOR,
        _ => {}
    }
    factor
}

/// `75 + len(interior)/20 + len(exterior)/20`, capped at 95.
///
/// Lengths are counted in UTF-16 code units, like a browser string's `length`,
/// so an emoji outside the BMP counts twice.
pub fn confidence(interior: &str, exterior: &str) -> f64 {
    let units = (interior.encode_utf16().count() + exterior.encode_utf16().count()) as f64;
    (CONFIDENCE_BASE + units / CONFIDENCE_CHARS_PER_POINT).min(CONFIDENCE_CAP)
}

/// Round to the nearest [`PRICE_STEP`], halves rounding up.
pub fn round_to_step(value: f64) -> u64 {
    if !(value.is_finite() && value > 0.0) {
        return 0;
    }
    ((value / PRICE_STEP + 0.5).floor() * PRICE_STEP) as u64
}

/// Compute every intermediate factor for `attrs` at `base_price`.
pub fn valuation_factors(attrs: &CarAttributes, base_price: u64, current_year: i32) -> ValuationFactors {
    let age = vehicle_age(attrs.year, current_year);
    let depreciation = depreciation_factor(age);
    let mileage = mileage_adjustment(attrs.mileage, age);
    let condition = condition_factor(attrs);
    let adjusted = base_price as f64 * depreciation * mileage * condition;

    ValuationFactors {
        age,
        depreciation,
        mileage,
        condition,
        adjusted,
    }
}

/// Estimate the resale price band for `attrs`.
///
/// A `base_price` of `0` (unknown catalog entry) yields a zero band with the
/// confidence still computed; callers should check the base price or
/// [`PriceEstimate::has_data`] before presenting the numbers.
pub fn estimate(attrs: &CarAttributes, base_price: u64, current_year: i32) -> PriceEstimate {
    let confidence = confidence(&attrs.interior_condition, &attrs.exterior_condition);
    if base_price == 0 {
        return PriceEstimate {
            min: 0,
            max: 0,
            suggested: 0,
            confidence,
        };
    }

    let factors = valuation_factors(attrs, base_price, current_year);
    let variance = factors.adjusted * RANGE_VARIANCE;

    debug!(
        base_price,
        age = factors.age,
        depreciation = factors.depreciation,
        mileage = factors.mileage,
        condition = factors.condition,
        adjusted = factors.adjusted,
        "valuation factors"
    );

    PriceEstimate {
        min: round_to_step(factors.adjusted - variance),
        max: round_to_step(factors.adjusted + variance),
        suggested: round_to_step(factors.adjusted),
        confidence,
    }
}
