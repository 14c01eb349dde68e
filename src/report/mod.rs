//! Reporting utilities: price formatting and text tables.

pub mod format;

pub use format::*;
