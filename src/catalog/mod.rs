//! Reference catalog: list prices by make, model and variant.
//!
//! All lookups are exact and case-sensitive. A miss at any level yields an
//! empty list (for the browse helpers) or a base price of `0` (for
//! [`base_price`]); there is no fuzzy matching or normalization.

pub mod table;

pub use table::CATALOG;

use crate::domain::{FuelType, Transmission};

/// Number of selectable manufacturing years offered by the wizard.
const YEAR_CHOICES: i32 = 30;

#[derive(Debug, Clone, Copy)]
pub struct CatalogVariant {
    pub name: &'static str,
    pub base_price: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogModel {
    pub name: &'static str,
    pub variants: &'static [CatalogVariant],
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogMake {
    pub name: &'static str,
    pub models: &'static [CatalogModel],
}

/// Gearbox labels in wizard order.
pub const TRANSMISSION_TYPES: [&str; 4] = [
    Transmission::Manual.label(),
    Transmission::Automatic.label(),
    Transmission::Cvt.label(),
    Transmission::Dct.label(),
];

/// Fuel labels in wizard order.
pub const FUEL_TYPES: [&str; 5] = [
    FuelType::Petrol.label(),
    FuelType::Diesel.label(),
    FuelType::Hybrid.label(),
    FuelType::Electric.label(),
    FuelType::Cng.label(),
];

pub fn makes() -> &'static [CatalogMake] {
    CATALOG
}

pub fn find_make(make: &str) -> Option<&'static CatalogMake> {
    CATALOG.iter().find(|m| m.name == make)
}

pub fn find_model(make: &str, model: &str) -> Option<&'static CatalogModel> {
    find_make(make)?.models.iter().find(|m| m.name == model)
}

pub fn models_for_make(make: &str) -> &'static [CatalogModel] {
    find_make(make).map(|m| m.models).unwrap_or(&[])
}

pub fn variants_for_model(make: &str, model: &str) -> &'static [CatalogVariant] {
    find_model(make, model).map(|m| m.variants).unwrap_or(&[])
}

/// List price for an exact (make, model, variant) triple.
pub fn lookup(make: &str, model: &str, variant: &str) -> Option<u64> {
    find_model(make, model)?
        .variants
        .iter()
        .find(|v| v.name == variant)
        .map(|v| v.base_price)
}

/// List price, or `0` when the triple is not in the catalog.
pub fn base_price(make: &str, model: &str, variant: &str) -> u64 {
    lookup(make, model, variant).unwrap_or(0)
}

/// The 30 manufacturing years ending at `current_year`, newest first.
pub fn selectable_years(current_year: i32) -> Vec<i32> {
    (0..YEAR_CHOICES).map(|i| current_year - i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_exact_match() {
        assert_eq!(base_price("Toyota", "Corolla", "Altis 1.6"), 4_500_000);
        assert_eq!(base_price("Honda", "Civic", "Oriel 1.5T"), 7_200_000);
        assert_eq!(lookup("Suzuki", "Alto", "VXL AGS"), Some(2_350_000));
    }

    #[test]
    fn base_price_is_zero_on_any_miss() {
        assert_eq!(base_price("Toyota", "Corolla", "Altis"), 0);
        assert_eq!(base_price("Toyota", "Supra", "Altis 1.6"), 0);
        assert_eq!(base_price("Tesla", "Corolla", "Altis 1.6"), 0);
        // No case folding or trimming.
        assert_eq!(base_price("toyota", "Corolla", "Altis 1.6"), 0);
        assert_eq!(base_price("Toyota", "Corolla", " Altis 1.6"), 0);
    }

    #[test]
    fn same_variant_name_under_different_models() {
        assert_eq!(base_price("Toyota", "Corolla", "GLi 1.3"), 3_200_000);
        assert_eq!(base_price("Toyota", "Yaris", "GLi 1.3"), 2_800_000);
    }

    #[test]
    fn browse_helpers() {
        assert_eq!(makes().len(), 10);
        assert!(models_for_make("Toyota").iter().any(|m| m.name == "Land Cruiser"));
        assert!(models_for_make("Unknown").is_empty());
        assert_eq!(variants_for_model("Toyota", "Camry").len(), 2);
        assert!(variants_for_model("Toyota", "Civic").is_empty());
    }

    #[test]
    fn every_catalog_price_is_positive() {
        for make in CATALOG {
            assert!(!make.models.is_empty(), "{} has no models", make.name);
            for model in make.models {
                assert!(!model.variants.is_empty(), "{} {} has no variants", make.name, model.name);
                for variant in model.variants {
                    assert!(variant.base_price > 0);
                }
            }
        }
    }

    #[test]
    fn selectable_years_newest_first() {
        let years = selectable_years(2026);
        assert_eq!(years.len(), 30);
        assert_eq!(years[0], 2026);
        assert_eq!(years[29], 1997);
    }

    #[test]
    fn label_lists_follow_enum_order() {
        assert_eq!(TRANSMISSION_TYPES, ["Manual", "Automatic", "CVT", "DCT"]);
        assert_eq!(FUEL_TYPES, ["Petrol", "Diesel", "Hybrid", "Electric", "CNG"]);
    }
}
