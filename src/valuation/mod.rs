//! Valuation orchestration.
//!
//! Responsibilities:
//!
//! - price estimation from catalog base price and car attributes (`engine`)
//! - the illustrative monthly price trend (`trend`)
//! - the results-page breakdown lines (`breakdown`)

pub mod breakdown;
pub mod engine;
pub mod trend;

pub use breakdown::*;
pub use engine::*;
pub use trend::*;
