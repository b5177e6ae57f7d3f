//! Admission pipeline for postgraduate applicant rosters.
//!
//! The [`cohort`] module holds the pure pipeline: GPA normalization onto the
//! 0-5 scale, derived score inputs, cascading cohort filters, weighted
//! scoring, and top-N selection. [`roster`] is the CSV boundary that feeds
//! it, and [`config`] / [`telemetry`] carry the runtime wiring for the
//! command-line driver.

pub mod cohort;
pub mod config;
pub mod error;
pub mod roster;
pub mod telemetry;
