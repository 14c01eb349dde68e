//! Results-page query strings.
//!
//! The evaluation wizard hands its answers to the results page as an
//! `application/x-www-form-urlencoded` query string. Every value arrives as a
//! string, so decoding is lenient:
//!
//! - numbers use leading-integer parsing (`"2019abc"` → 2019); failures fall back
//!   to a default instead of erroring
//! - `year` falls back to the current year (so age is 0), `mileage` to 0
//! - unknown gearbox/fuel labels become `None` and simply earn no adjustment

use std::collections::HashMap;

use url::form_urlencoded;

use crate::domain::{CarAttributes, FuelType, ModificationStatus, Transmission};

/// Decode a query string (with or without a leading `?`).
///
/// When a key repeats, its first occurrence wins.
pub fn attributes_from_query(query: &str, current_year: i32) -> CarAttributes {
    let query = query.trim().trim_start_matches('?');
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()).into_owned() {
        params.entry(key).or_insert(value);
    }
    let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

    let year = parse_leading_int(get("year"))
        .filter(|&y| y != 0)
        .and_then(|y| i32::try_from(y).ok())
        .unwrap_or(current_year);

    let mileage = parse_leading_int(get("mileage"))
        .map(|km| u64::try_from(km).unwrap_or(0))
        .unwrap_or(0);

    let engine_capacity = parse_leading_int(get("engineCapacity")).and_then(|cc| u32::try_from(cc).ok());

    CarAttributes {
        make: get("make").to_string(),
        model: get("model").to_string(),
        variant: get("variant").to_string(),
        year,
        mileage,
        transmission: Transmission::from_label(get("transmission")),
        fuel_type: FuelType::from_label(get("fuelType")),
        engine_capacity,
        is_accidental: get("isAccidental") == "yes",
        modification_status: ModificationStatus::from_label(get("modificationStatus")),
        interior_condition: get("interiorCondition").to_string(),
        exterior_condition: get("exteriorCondition").to_string(),
    }
}

/// Encode attributes the way the wizard submits them.
pub fn attributes_to_query(attrs: &CarAttributes) -> String {
    let year = attrs.year.to_string();
    let mileage = attrs.mileage.to_string();
    let engine = attrs.engine_capacity.map(|cc| cc.to_string()).unwrap_or_default();

    encode_query([
        ("make", attrs.make.as_str()),
        ("model", attrs.model.as_str()),
        ("variant", attrs.variant.as_str()),
        ("year", year.as_str()),
        ("mileage", mileage.as_str()),
        ("transmission", attrs.transmission.map(Transmission::label).unwrap_or("")),
        ("engineCapacity", engine.as_str()),
        ("fuelType", attrs.fuel_type.map(FuelType::label).unwrap_or("")),
        ("interiorCondition", attrs.interior_condition.as_str()),
        ("exteriorCondition", attrs.exterior_condition.as_str()),
        ("isAccidental", if attrs.is_accidental { "yes" } else { "no" }),
        ("modificationStatus", attrs.modification_status.label()),
    ])
}

/// Form-encode key/value pairs in the given order.
pub fn encode_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Parse an optional sign followed by decimal digits, ignoring anything after
/// the digits. Leading whitespace is skipped. Returns `None` when no digit is
/// found or the value does not fit in an `i64`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_results_query() {
        let q = "?make=Toyota&model=Corolla&variant=Altis+1.6&year=2022&mileage=60000\
                 &transmission=Automatic&engineCapacity=1600&fuelType=Petrol\
                 &interiorCondition=Clean%20seats&exteriorCondition=Minor+scratches\
                 &isAccidental=no&modificationStatus=stock";
        let attrs = attributes_from_query(q, 2026);

        assert_eq!(attrs.make, "Toyota");
        assert_eq!(attrs.variant, "Altis 1.6");
        assert_eq!(attrs.year, 2022);
        assert_eq!(attrs.mileage, 60_000);
        assert_eq!(attrs.transmission, Some(Transmission::Automatic));
        assert_eq!(attrs.fuel_type, Some(FuelType::Petrol));
        assert_eq!(attrs.engine_capacity, Some(1600));
        assert_eq!(attrs.interior_condition, "Clean seats");
        assert_eq!(attrs.exterior_condition, "Minor scratches");
        assert!(!attrs.is_accidental);
        assert_eq!(attrs.modification_status, ModificationStatus::Stock);
    }

    #[test]
    fn missing_and_garbage_fields_fall_back() {
        let attrs = attributes_from_query("make=Honda&year=abc&mileage=&transmission=AGS", 2026);
        assert_eq!(attrs.year, 2026);
        assert_eq!(attrs.mileage, 0);
        assert_eq!(attrs.transmission, None);
        assert_eq!(attrs.fuel_type, None);
        assert_eq!(attrs.engine_capacity, None);
        assert!(!attrs.is_accidental);
        assert_eq!(attrs.modification_status, ModificationStatus::Stock);
        assert_eq!(attrs.model, "");
    }

    #[test]
    fn first_duplicate_key_wins() {
        let attrs = attributes_from_query("make=Toyota&make=Honda&year=2020&year=2010", 2026);
        assert_eq!(attrs.make, "Toyota");
        assert_eq!(attrs.year, 2020);
    }

    #[test]
    fn year_zero_means_current_year() {
        assert_eq!(attributes_from_query("year=0", 2026).year, 2026);
    }

    #[test]
    fn negative_mileage_clamps_to_zero() {
        assert_eq!(attributes_from_query("mileage=-500", 2026).mileage, 0);
    }

    #[test]
    fn accident_flag_requires_exact_yes() {
        assert!(attributes_from_query("isAccidental=yes", 2026).is_accidental);
        assert!(!attributes_from_query("isAccidental=Yes", 2026).is_accidental);
        assert!(!attributes_from_query("isAccidental=true", 2026).is_accidental);
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("2019"), Some(2019));
        assert_eq!(parse_leading_int("  2019abc"), Some(2019));
        assert_eq!(parse_leading_int("12.5"), Some(12));
        assert_eq!(parse_leading_int("-40"), Some(-40));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn encoded_wizard_query_decodes_to_same_attributes() {
        let attrs = CarAttributes {
            make: "KIA".to_string(),
            model: "Sportage".to_string(),
            variant: "AWD".to_string(),
            year: 2023,
            mileage: 12_345,
            transmission: Some(Transmission::Automatic),
            fuel_type: Some(FuelType::Hybrid),
            engine_capacity: Some(2000),
            is_accidental: true,
            modification_status: ModificationStatus::Modified,
            interior_condition: "Leather & clean = good".to_string(),
            exterior_condition: "Paint 100% original".to_string(),
        };
        let query = attributes_to_query(&attrs);
        assert!(query.starts_with("make=KIA&model=Sportage"));
        assert_eq!(attributes_from_query(&query, 2026), attrs);
    }
}
