//! Logging setup (`tracing` + `tracing-subscriber`).
//!
//! Events go to stderr so `--print` output on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Filter used when neither a flag nor `RUST_LOG` says otherwise.
pub const DEFAULT_FILTER: &str = "metric_analyser=warn,error";

/// Pick the filter directive for the given flags.
///
/// `quiet` wins over everything, including `RUST_LOG`.
pub fn filter_directive(verbose: bool, quiet: bool, rust_log: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    if verbose {
        return "metric_analyser=debug,info".to_string();
    }
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber. A subscriber that is already set is kept.
pub fn init_logging(verbose: bool, quiet: bool) -> Result<(), AppError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(verbose, quiet, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::storage(format!("Invalid log filter '{directive}': {e}")))?;

    // Err only means a global subscriber exists already.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();

    Ok(())
}
