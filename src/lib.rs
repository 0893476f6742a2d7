//! `metric-analyser` library crate.
//!
//! The binary is a thin wrapper around this library so that:
//!
//! - the statistics and report code is testable without spawning processes
//! - readers and writers can be swapped (filesystem, in-memory, stdout)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod stats;
