//! Head-vs-tail growth signal over per-period visitor totals
//!
//! The trend compares the mean of the oldest periods against the mean of
//! the newest periods and expresses the change as a percentage of the
//! baseline. The comparison windows never overlap: for series shorter
//! than twice the configured window, both windows shrink to half the
//! series length. A single-period series is the only case where head and
//! tail coincide, and it reads as a flat trend.

use crate::error::{MetricsError, Result};
use crate::record::TourismRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of the visitor trend
///
/// Growth strictly requires a positive delta; a flat series reads as
/// decline with zero magnitude, matching the dashboard's original wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Growth,
    Decline,
}

/// Relative change between the oldest and newest comparison windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Signed percentage change of the tail mean over the head mean
    pub delta_percent: f64,
    pub direction: TrendDirection,
}

/// Collapse records into chronologically ordered per-period visitor totals
///
/// Records sharing a reporting date (one per province) are summed into a
/// single period total.
pub fn period_totals(records: &[TourismRecord]) -> Vec<(NaiveDate, u64)> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert(0) += record.visitors;
    }
    totals.into_iter().collect()
}

/// Compute the head-vs-tail delta over an ordered period series
///
/// `delta_percent = (mean(tail window) / mean(head window) - 1) * 100`,
/// where the effective window is `min(window, len / 2)` and at least one
/// period.
///
/// # Errors
///
/// Returns [`MetricsError::NoData`] for an empty series and
/// [`MetricsError::UndefinedTrend`] when the head mean is exactly zero, so
/// no infinity or NaN ever reaches user-visible output.
pub fn analyze(series: &[(NaiveDate, u64)], window: usize) -> Result<TrendSummary> {
    if series.is_empty() {
        return Err(MetricsError::NoData);
    }

    let effective = window.min(series.len() / 2).max(1);
    let head: u64 = series[..effective].iter().map(|&(_, v)| v).sum();
    let tail: u64 = series[series.len() - effective..].iter().map(|&(_, v)| v).sum();

    let head_mean = head as f64 / effective as f64;
    let tail_mean = tail as f64 / effective as f64;

    if head_mean == 0.0 {
        return Err(MetricsError::UndefinedTrend);
    }

    let delta_percent = (tail_mean / head_mean - 1.0) * 100.0;
    let direction = if delta_percent > 0.0 {
        TrendDirection::Growth
    } else {
        TrendDirection::Decline
    };

    Ok(TrendSummary {
        delta_percent,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Province;

    fn series(values: &[u64]) -> Vec<(NaiveDate, u64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let date = NaiveDate::from_ymd_opt(2023, 1 + i as u32, 1).unwrap();
                (date, v)
            })
            .collect()
    }

    #[test]
    fn test_period_totals_sums_across_provinces() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let records = vec![
            TourismRecord::new(date, Province::Luanda, 100, 0.0, 3.0, 4.0),
            TourismRecord::new(date, Province::Benguela, 50, 0.0, 3.0, 4.0),
        ];

        assert_eq!(period_totals(&records), vec![(date, 150)]);
    }

    #[test]
    fn test_increasing_series_yields_growth() {
        let result = analyze(&series(&[100, 120, 140, 160, 180, 200]), 3).unwrap();
        assert!(result.delta_percent > 0.0);
        assert_eq!(result.direction, TrendDirection::Growth);
    }

    #[test]
    fn test_constant_series_yields_zero_delta() {
        let result = analyze(&series(&[500, 500, 500, 500]), 3).unwrap();
        assert_eq!(result.delta_percent, 0.0);
        assert_eq!(result.direction, TrendDirection::Decline);
    }

    #[test]
    fn test_three_period_series_compares_first_and_last() {
        // With only three periods the windows shrink to one period each,
        // so the first and last totals are compared directly.
        let result = analyze(&series(&[100, 110, 120]), 3).unwrap();
        assert!((result.delta_percent - 20.0).abs() < 1e-9);
        assert_eq!(result.direction, TrendDirection::Growth);
    }

    #[test]
    fn test_two_period_series_uses_disjoint_windows() {
        let result = analyze(&series(&[100, 50]), 3).unwrap();
        assert!((result.delta_percent + 50.0).abs() < 1e-9);
        assert_eq!(result.direction, TrendDirection::Decline);
    }

    #[test]
    fn test_single_period_series_is_flat() {
        let result = analyze(&series(&[42]), 3).unwrap();
        assert_eq!(result.delta_percent, 0.0);
        assert_eq!(result.direction, TrendDirection::Decline);
    }

    #[test]
    fn test_empty_series_reports_no_data() {
        let err = analyze(&[], 3).unwrap_err();
        assert!(matches!(err, MetricsError::NoData));
    }

    #[test]
    fn test_zero_baseline_reports_undefined_trend() {
        let err = analyze(&series(&[0, 0, 100, 200]), 3).unwrap_err();
        assert!(matches!(err, MetricsError::UndefinedTrend));
    }
}
