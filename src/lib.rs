//! `car-value` library crate.
//!
//! The binary (`carval`) is a thin wrapper around this library so that:
//!
//! - the valuation logic is testable without spawning processes
//! - the CLI and the TUI share one pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod form;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tui;
pub mod valuation;
