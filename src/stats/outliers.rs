//! Low-side outlier detection (Tukey fence).

use chrono::NaiveDate;

use crate::domain::Measurement;

/// Multiplier applied to the IQR below the first quartile.
pub const FENCE_FACTOR: f64 = 1.5;

/// Lower fence: values strictly below it are under-performing.
pub fn lower_fence(first_quartile: f64, iqr: f64) -> f64 {
    first_quartile - FENCE_FACTOR * iqr
}

/// Timestamps of measurements below `Q1 - 1.5 * IQR`, in input order.
///
/// The result is not sorted; callers that need chronological order sort it.
pub fn find_under_performing(
    measurements: &[Measurement],
    first_quartile: f64,
    iqr: f64,
) -> Vec<NaiveDate> {
    let fence = lower_fence(first_quartile, iqr);
    measurements
        .iter()
        .filter(|m| m.value < fence)
        .map(|m| m.timestamp)
        .collect()
}
