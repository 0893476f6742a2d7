//! Per-dataset analysis pipeline.
//!
//! For each dataset:
//! statistics -> low outliers -> period compression -> unit selection -> report
//!
//! Datasets share no state, so analysis runs on the rayon pool and reports are
//! written only after every dataset has been analysed.

use rayon::prelude::*;

use crate::domain::{Dataset, Report, SummaryStats};
use crate::error::AppError;
use crate::io::{Reader, Writer};
use crate::report::{ReportInput, compress_periods, render_report, select_unit};
use crate::stats::{find_under_performing, min_max_date};

/// Result of analysing a single dataset.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub stats: SummaryStats,
    /// Compressed under-performing periods, chronological.
    pub under_performing: Vec<String>,
    pub report: Report,
}

/// Counters for one `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub datasets: usize,
    pub reports: usize,
    /// Datasets with at least one under-performing period.
    pub under_performing: usize,
}

/// Analyse one dataset and render its report. Pure; no I/O.
pub fn analyse(dataset: &Dataset) -> Analysis {
    let measurements = &dataset.measurements;
    if measurements.is_empty() {
        tracing::warn!(dataset = %dataset.name, "dataset has no measurements");
    }

    let stats = SummaryStats::compute(measurements);

    let mut outliers = find_under_performing(measurements, stats.first_quartile, stats.iqr);
    outliers.sort();
    let under_performing = compress_periods(&outliers);

    let unit = select_unit(stats.representative());
    tracing::debug!(dataset = %dataset.name, unit = unit.label(), "selected display unit");

    let content = render_report(&ReportInput {
        period: min_max_date(measurements),
        stats: &stats,
        unit,
        under_performing: &under_performing,
    });

    tracing::info!(
        dataset = %dataset.name,
        measurements = measurements.len(),
        outliers = outliers.len(),
        "dataset analysed"
    );

    Analysis {
        stats,
        under_performing,
        report: Report {
            name: dataset.output_name(),
            content,
        },
    }
}

/// Reads datasets, analyses them, and writes one report per dataset.
pub struct Analyser<R, W> {
    reader: R,
    writer: W,
}

impl<R: Reader, W: Writer> Analyser<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run the full pipeline. Any read, decode, or write failure aborts.
    pub fn run(&mut self) -> Result<RunSummary, AppError> {
        let datasets = self.reader.read_all()?;

        let analyses: Vec<Analysis> = datasets.par_iter().map(analyse).collect();

        let reports: Vec<Report> = analyses.iter().map(|a| a.report.clone()).collect();
        self.writer.write_all(&reports)?;

        let under_performing = analyses
            .iter()
            .filter(|a| !a.under_performing.is_empty())
            .count();
        let summary = RunSummary {
            datasets: datasets.len(),
            reports: reports.len(),
            under_performing,
        };
        tracing::info!(
            datasets = summary.datasets,
            under_performing = summary.under_performing,
            "run complete"
        );
        Ok(summary)
    }
}
