//! Order statistics over a dataset.
//!
//! Quartiles are positional estimators on the sorted values (integer-division
//! indices, no interpolation). Reports produced by earlier releases depend on
//! these exact positions, so they must not be replaced by a percentile method.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::domain::{Measurement, SummaryStats};

impl SummaryStats {
    /// Compute every descriptive statistic of `measurements` in one call.
    pub fn compute(measurements: &[Measurement]) -> Self {
        let (min, max, mean) = min_max_mean(measurements);
        let (median, first_quartile, iqr) = median_quartile_iqr(measurements);
        Self {
            min,
            max,
            mean,
            median,
            first_quartile,
            iqr,
        }
    }

    /// Smallest of min/max/median/mean, used to pick the display unit.
    pub fn representative(&self) -> f64 {
        self.min.min(self.max.min(self.median.min(self.mean)))
    }
}

/// Single-pass `(min, max, mean)`; `(0, 0, 0)` for empty input.
///
/// `min` starts at 0 and is replaced whenever a value is smaller *or* the
/// running min is still exactly 0. A zero scanned after the first value is
/// therefore overwritten by the next value.
pub fn min_max_mean(measurements: &[Measurement]) -> (f64, f64, f64) {
    if measurements.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    let mut sum = 0.0_f64;

    for m in measurements {
        if m.value < min || min == 0.0 {
            min = m.value;
        }
        if m.value > max {
            max = m.value;
        }
        sum += m.value;
    }

    (min, max, sum / measurements.len() as f64)
}

/// `(median, Q1, IQR)` from the sorted values; `(0, 0, 0)` for empty input.
///
/// Even `n` averages the pair straddling each position (`n/2`, `n/4`, `3n/4`);
/// odd `n` takes the element at the position directly.
pub fn median_quartile_iqr(measurements: &[Measurement]) -> (f64, f64, f64) {
    let mut values: Vec<f64> = measurements.iter().map(|m| m.value).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = values.len();
    if n == 0 {
        return (0.0, 0.0, 0.0);
    }

    let (median, q1, q3) = if n % 2 == 0 {
        (
            pair_mean(&values, n / 2),
            pair_mean(&values, n / 4),
            pair_mean(&values, 3 * n / 4),
        )
    } else {
        (values[n / 2], values[n / 4], values[3 * n / 4])
    };

    (median, q1, q3 - q1)
}

/// Mean of `values[idx - 1]` and `values[idx]`.
///
/// With two values `n / 4` is 0; the lower neighbour is clamped to index 0.
fn pair_mean(values: &[f64], idx: usize) -> f64 {
    (values[idx.saturating_sub(1)] + values[idx]) / 2.0
}

/// Earliest and latest timestamp, independent of input order.
pub fn min_max_date(measurements: &[Measurement]) -> Option<(NaiveDate, NaiveDate)> {
    let first = measurements.first()?.timestamp;
    Some(measurements.iter().fold((first, first), |(lo, hi), m| {
        (lo.min(m.timestamp), hi.max(m.timestamp))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2006, 1, d).unwrap()
    }

    fn values(vs: &[f64]) -> Vec<Measurement> {
        vs.iter().map(|&v| Measurement::new(v, day(1))).collect()
    }

    #[test]
    fn even_count_averages_neighbours() {
        let ms = values(&[4.0, 2.0, 3.0, 1.0]);
        assert_eq!(min_max_mean(&ms), (1.0, 4.0, 2.5));
        assert_eq!(median_quartile_iqr(&ms), (2.5, 1.5, 2.0));
    }

    #[test]
    fn odd_count_takes_positions() {
        let ms = values(&[1.0, 2.0, 3.0]);
        assert_eq!(min_max_mean(&ms), (1.0, 3.0, 2.0));
        assert_eq!(median_quartile_iqr(&ms), (2.0, 1.0, 2.0));
    }

    #[test]
    fn empty_is_all_zero() {
        assert_eq!(min_max_mean(&[]), (0.0, 0.0, 0.0));
        assert_eq!(median_quartile_iqr(&[]), (0.0, 0.0, 0.0));
        assert_eq!(SummaryStats::compute(&[]), SummaryStats::default());
        assert_eq!(min_max_date(&[]), None);
    }

    #[test]
    fn two_values_clamp_lower_quartile_index() {
        let ms = values(&[10.0, 20.0]);
        assert_eq!(median_quartile_iqr(&ms), (15.0, 10.0, 5.0));
    }

    #[test]
    fn single_value() {
        let ms = values(&[7.0]);
        assert_eq!(min_max_mean(&ms), (7.0, 7.0, 7.0));
        assert_eq!(median_quartile_iqr(&ms), (7.0, 7.0, 0.0));
    }

    #[test]
    fn zero_after_first_value_is_masked() {
        // Running min resets whenever it sits at exactly 0.
        let ms = values(&[5.0, 0.0, 3.0]);
        assert_eq!(min_max_mean(&ms).0, 3.0);

        let ms = values(&[0.0, 5.0]);
        assert_eq!(min_max_mean(&ms).0, 5.0);
    }

    #[test]
    fn min_max_date_ignores_order() {
        let ms = vec![
            Measurement::new(1.0, day(5)),
            Measurement::new(1.0, day(2)),
            Measurement::new(1.0, day(9)),
        ];
        assert_eq!(min_max_date(&ms), Some((day(2), day(9))));
    }

    #[test]
    fn representative_is_smallest_statistic() {
        let stats = SummaryStats {
            min: 4.0,
            max: 10.0,
            mean: 3.0,
            median: 5.0,
            first_quartile: 0.0,
            iqr: 0.0,
        };
        assert_eq!(stats.representative(), 3.0);
    }

    proptest! {
        #[test]
        fn summary_is_ordered(vs in prop::collection::vec(0.001f64..1e9, 1..200)) {
            let stats = SummaryStats::compute(&values(&vs));
            let slack = stats.max * 1e-12;
            prop_assert!(stats.min <= stats.median);
            prop_assert!(stats.median <= stats.max);
            prop_assert!(stats.min <= stats.mean + slack);
            prop_assert!(stats.mean <= stats.max + slack);
        }

        #[test]
        fn iqr_is_never_negative(vs in prop::collection::vec(0.0f64..1e9, 0..200)) {
            let (_, _, iqr) = median_quartile_iqr(&values(&vs));
            prop_assert!(iqr >= 0.0);
        }
    }
}
