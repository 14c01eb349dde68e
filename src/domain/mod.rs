//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - car input enums and attributes (`Transmission`, `FuelType`, `CarAttributes`)
//! - valuation outputs (`PriceEstimate`, `TrendPoint`, `BreakdownLine`)
//! - run configuration and the saved valuation file (`ValuationConfig`, `ValuationFile`)

pub mod types;

pub use types::*;
