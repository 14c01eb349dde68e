//! Input/output helpers.
//!
//! - results-page query strings (`query`)
//! - trend CSV export (`export`)
//! - valuation JSON read/write (`valuation`)

pub mod export;
pub mod query;
pub mod valuation;

pub use export::*;
pub use query::*;
pub use valuation::*;
