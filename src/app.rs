//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - wires the reader/writer collaborators into the pipeline
//! - runs it on a rayon pool of the requested size

use clap::Parser;

use crate::cli::Cli;
use crate::domain::AnalyserConfig;
use crate::error::AppError;
use crate::io::{FsReader, FsWriter, StdoutWriter};

pub mod pipeline;

pub use pipeline::{Analyser, Analysis, RunSummary, analyse};

/// Entry point for the `metric-analyser` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose, cli.quiet)?;

    let config = cli.config();
    tracing::debug!(?config, "starting");

    let summary = run_with_config(&config)?;
    tracing::info!(reports = summary.reports, "done");
    Ok(())
}

/// Run the pipeline over `config.input_dir`.
pub fn run_with_config(config: &AnalyserConfig) -> Result<RunSummary, AppError> {
    let reader = FsReader::new(&config.input_dir);

    let pool = build_pool(config.threads)?;
    pool.install(|| {
        if config.print {
            Analyser::new(reader, StdoutWriter).run()
        } else {
            Analyser::new(reader, FsWriter::new(&config.output_dir)).run()
        }
    })
}

fn build_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, AppError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AppError::storage(format!("Failed to start worker pool: {e}")))
}
