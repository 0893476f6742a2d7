//! Shared domain types.
//!
//! These types are intentionally small value objects:
//!
//! - `Measurement` is decoded straight from the input JSON
//! - `Dataset` groups the measurements of one input source
//! - `SummaryStats` and `Report` are derived per dataset and never mutated

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar format used for both input decoding and report output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single throughput sample.
///
/// `value` is in bytes per second; `timestamp` has day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "metricValue")]
    pub value: f64,
    #[serde(rename = "dtime", with = "iso_date")]
    pub timestamp: NaiveDate,
}

impl Measurement {
    pub fn new(value: f64, timestamp: NaiveDate) -> Self {
        Self { value, timestamp }
    }
}

/// All measurements read from one input source.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Source name up to its first `.` (`download.json` -> `download`).
    pub name: String,
    pub measurements: Vec<Measurement>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, measurements: Vec<Measurement>) -> Self {
        Self {
            name: name.into(),
            measurements,
        }
    }

    /// Build a dataset from a source identifier such as a file name.
    pub fn from_source(source: &str, measurements: Vec<Measurement>) -> Self {
        Self::new(dataset_name(source), measurements)
    }

    /// Name of the report produced for this dataset.
    pub fn output_name(&self) -> String {
        format!("{}.output", self.name)
    }
}

/// Strip everything from the first `.` of a source identifier.
pub fn dataset_name(source: &str) -> &str {
    source.split('.').next().unwrap_or(source)
}

/// Descriptive statistics of one dataset (bytes per second).
///
/// An empty dataset yields all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub first_quartile: f64,
    pub iqr: f64,
}

/// Rendered report text keyed by its output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub content: String,
}

/// Run configuration, derived from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Worker threads for per-dataset analysis (`None` = rayon default).
    pub threads: Option<usize>,
    /// Print reports to stdout instead of writing them to `output_dir`.
    pub print: bool,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./input"),
            output_dir: PathBuf::from("./output"),
            threads: None,
            print: false,
        }
    }
}

/// Strict `YYYY-MM-DD` (de)serialization for `NaiveDate`.
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid date '{s}', expected YYYY-MM-DD: {e}")))
    }
}
