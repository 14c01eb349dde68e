//! Terminal text formatting.
//!
//! Prices are PKR and follow local conventions: amounts of a crore (10 million)
//! or more read as "x.xx Crore", amounts of a lac (100 thousand) or more as
//! "x.x Lac", smaller amounts as comma-grouped integers.

use chrono::NaiveDate;

use crate::catalog::CatalogMake;
use crate::domain::{BreakdownLine, CarAttributes, Impact, PriceEstimate, TrendPoint};

const CRORE: u64 = 10_000_000;
const LAC: u64 = 100_000;

/// Long-form price: "1.25 Crore", "32.0 Lac", "99,999".
pub fn format_price(price: u64) -> String {
    if price >= CRORE {
        format!("{} Crore", to_fixed(price, CRORE, 2))
    } else if price >= LAC {
        format!("{} Lac", to_fixed(price, LAC, 1))
    } else {
        group_thousands(price)
    }
}

/// Compact price for chart axes: "1.3Cr", "32L", "99,999".
pub fn format_price_short(price: u64) -> String {
    if price >= CRORE {
        format!("{}Cr", to_fixed(price, CRORE, 1))
    } else if price >= LAC {
        format!("{}L", to_fixed(price, LAC, 0))
    } else {
        group_thousands(price)
    }
}

/// `value / divisor` with `digits` decimals, rounded the way a browser's
/// `toFixed` rounds the binary quotient.
///
/// A quotient that sits exactly on a tie (125,000 / 100,000 = 1.25) rounds up.
/// Every other quotient rounds its exact binary value, so 1.15, which is stored
/// slightly below 1.15, renders as "1.1".
fn to_fixed(value: u64, divisor: u64, digits: usize) -> String {
    let scale = 10u128.pow(digits as u32);
    let scaled = u128::from(value) * scale;
    let d = u128::from(divisor);

    // The quotient is an exact tie only when it is representable in binary,
    // i.e. the reduced denominator is a power of two.
    let rational_tie = (scaled % d) * 2 == d;
    if rational_tie && (divisor / gcd(value, divisor)).is_power_of_two() {
        let units = scaled / d + 1;
        return if digits == 0 {
            units.to_string()
        } else {
            format!("{}.{:0width$}", units / scale, units % scale, width = digits)
        };
    }

    format!("{:.*}", digits, value as f64 / divisor as f64)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Header block: car, range, suggested price, confidence.
pub fn format_summary(
    attrs: &CarAttributes,
    base_price: Option<u64>,
    estimate: &PriceEstimate,
    as_of: NaiveDate,
) -> String {
    let mut out = String::new();

    out.push_str("=== carval - Car Valuation ===\n");
    out.push_str(&format!("Car: {}\n", attrs.display_name()));
    out.push_str(&format!("As-of: {as_of}\n"));
    out.push_str(&format!(
        "Mileage: {} km | Transmission: {} | Fuel: {}\n",
        group_thousands(attrs.mileage),
        attrs.transmission.map(|t| t.label()).unwrap_or("-"),
        attrs.fuel_type.map(|f| f.label()).unwrap_or("-"),
    ));
    out.push_str(&format!(
        "History: {} | {}\n",
        if attrs.is_accidental { "Accidental" } else { "Non-Accidental" },
        match attrs.modification_status {
            crate::domain::ModificationStatus::Stock => "Stock Condition",
            crate::domain::ModificationStatus::Modified => "Modified",
        },
    ));

    out.push('\n');
    match base_price {
        Some(base) => {
            out.push_str(&format!("Base market value: {}\n", format_price(base)));
            out.push_str(&format!(
                "Estimated range : {} - {}\n",
                format_price(estimate.min),
                format_price(estimate.max)
            ));
            out.push_str(&format!("Suggested price : {}\n", format_price(estimate.suggested)));
        }
        None => {
            out.push_str("No market data for this make/model/variant; no price can be suggested.\n");
        }
    }
    out.push_str(&format!("Confidence      : {:.0}%\n", estimate.confidence));

    out
}

/// Breakdown table with signed amounts.
pub fn format_breakdown(lines: &[BreakdownLine]) -> String {
    let mut out = String::new();
    out.push_str("Price breakdown:\n");
    for line in lines {
        let sign = match line.impact {
            Impact::Positive => "+",
            Impact::Negative => "-",
            Impact::Neutral => " ",
        };
        out.push_str(&format!(
            "  {:<22} {sign}{:>14}\n",
            line.label,
            format_price(line.amount.unsigned_abs())
        ));
    }
    out
}

/// Month/price table for the trend series.
pub fn format_trend_table(trend: &[TrendPoint]) -> String {
    let mut out = String::new();
    out.push_str("Price trend (6 months):\n");
    out.push_str(&format!("  {:<5} {:>14} {:>12}\n", "month", "price", "short"));
    out.push_str(&format!("  {:-<5} {:-<14} {:-<12}\n", "", "", ""));
    for p in trend {
        out.push_str(&format!(
            "  {:<5} {:>14} {:>12}\n",
            p.label,
            group_thousands(p.price),
            format_price_short(p.price)
        ));
    }
    out
}

/// Catalog listing, optionally narrowed to one make and/or model.
pub fn format_catalog(makes: &[CatalogMake], make: Option<&str>, model: Option<&str>) -> String {
    let mut out = String::new();
    for m in makes.iter().filter(|m| make.is_none_or(|name| m.name == name)) {
        out.push_str(&format!("{}\n", m.name));
        for md in m.models.iter().filter(|md| model.is_none_or(|name| md.name == name)) {
            out.push_str(&format!("  {}\n", md.name));
            for v in md.variants {
                out.push_str(&format!("    {:<24} {:>14}\n", v.name, format_price(v.base_price)));
            }
        }
    }
    if out.is_empty() {
        out.push_str("No catalog entries match.\n");
    }
    out
}
