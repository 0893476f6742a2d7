//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - decoded input (`Measurement`, `Dataset`)
//! - derived values (`SummaryStats`, `Report`)
//! - run configuration (`AnalyserConfig`)

pub mod types;

pub use types::*;
