//! Decode measurement files.
//!
//! An input file is a JSON array of records:
//!
//! ```text
//! [{"metricValue": 12693166.98, "dtime": "2021-01-31"}, ...]
//! ```
//!
//! Decoding is strict: a malformed document or date fails the whole source,
//! and the caller aborts the run. Extra record fields are ignored.

use crate::domain::{Dataset, Measurement};
use crate::error::AppError;

/// Decode the raw bytes of `source` into measurements.
pub fn decode_measurements(source: &str, bytes: &[u8]) -> Result<Vec<Measurement>, AppError> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::decode(format!("Invalid measurements in '{source}': {e}")))
}

/// Decode `source` and name the dataset after it.
pub fn decode_dataset(source: &str, bytes: &[u8]) -> Result<Dataset, AppError> {
    let measurements = decode_measurements(source, bytes)?;
    tracing::debug!(source, count = measurements.len(), "decoded measurements");
    Ok(Dataset::from_source(source, measurements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn decodes_array_of_records() {
        let json = br#"[
            {"metricValue": 12693166.98, "dtime": "2021-01-31"},
            {"metricValue": 12000000, "dtime": "2021-02-01", "extra": true}
        ]"#;
        let ds = decode_dataset("download.json", json).unwrap();
        assert_eq!(ds.name, "download");
        assert_eq!(ds.measurements.len(), 2);
        assert_eq!(ds.measurements[0].value, 12693166.98);
        let feb_first = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
        assert_eq!(ds.measurements[1].timestamp, feb_first);
    }

    #[test]
    fn empty_array_is_valid() {
        let ds = decode_dataset("empty.json", b"[]").unwrap();
        assert!(ds.measurements.is_empty());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let json = b"[{\"metricValue\": 1,";
        let err = decode_dataset("bad.json", json).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("bad.json"));
    }

    #[test]
    fn malformed_date_is_decode_error() {
        let json = br#"[{"metricValue": 1, "dtime": "31/01/2021"}]"#;
        let err = decode_measurements("bad.json", json).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("31/01/2021"));
    }

    #[test]
    fn missing_field_is_decode_error() {
        let json = br#"[{"dtime": "2021-01-31"}]"#;
        let err = decode_measurements("bad.json", json).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
