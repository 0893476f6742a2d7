//! Compress dates into human-readable periods.
//!
//! Consecutive calendar days collapse into `between A and B`; isolated days are
//! printed on their own. Input must already be in chronological order.

use chrono::NaiveDate;

use crate::domain::DATE_FORMAT;

/// Collapse runs of consecutive days into display tokens.
///
/// Output order follows the input. Unsorted input is not regrouped.
pub fn compress_periods(dates: &[NaiveDate]) -> Vec<String> {
    let (first, rest) = match dates {
        [] => return Vec::new(),
        [only] => return vec![fmt_date(*only)],
        [first, rest @ ..] => (*first, rest),
    };

    let mut out = Vec::new();
    let mut run_start = first;
    let mut cursor = first;
    let last = rest.len() - 1;

    for (i, &next) in rest.iter().enumerate() {
        let contiguous = cursor.succ_opt() == Some(next);
        let is_last = i == last;
        tracing::trace!(%cursor, %next, contiguous, is_last, "period step");

        if is_last {
            if run_start == next {
                out.push(fmt_date(next));
            } else if contiguous {
                out.push(fmt_run(run_start, next));
            } else {
                out.push(fmt_run(run_start, cursor));
                out.push(fmt_date(next));
            }
        } else if !contiguous {
            out.push(fmt_run(run_start, cursor));
            run_start = next;
        }

        cursor = next;
    }

    out
}

fn fmt_run(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        fmt_date(start)
    } else {
        format!("between {} and {}", fmt_date(start), fmt_date(end))
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
