//! Record filtering
//!
//! This module handles:
//! - Trailing period windows resolved against the store's latest date
//! - Province selection filtering
//! - Composition of both into a [`FilterSpec`]
//!
//! Period windows are anchored to the maximum date present in the input,
//! never to wall-clock time, so the same store and filter always produce
//! the same subsequence. Re-applying a period filter to its own output is
//! therefore idempotent: the window anchor does not move.

use crate::record::{Province, RecordStore, TourismRecord};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Trailing analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    LastSixMonths,
    LastYear,
    LastTwoYears,
    All,
}

impl Period {
    /// Window length in days, `None` for the unbounded option
    pub fn window_days(&self) -> Option<i64> {
        match self {
            Period::LastSixMonths => Some(180),
            Period::LastYear => Some(365),
            Period::LastTwoYears => Some(730),
            Period::All => None,
        }
    }
}

/// Filter criteria for a dashboard pass
///
/// An empty province selection is a degenerate but valid state: nothing
/// passes, and downstream aggregates report no data. Presenting that as
/// "no data" is the rendering layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub period: Period,
    pub provinces: BTreeSet<Province>,
}

impl FilterSpec {
    /// Create a filter selecting every reporting province
    pub fn all_provinces(period: Period) -> Self {
        Self {
            period,
            provinces: Province::ALL.into_iter().collect(),
        }
    }

    /// Apply both filters to a store, period window first
    pub fn apply(&self, store: &RecordStore) -> Vec<TourismRecord> {
        let in_window = filter_by_period(store.records(), self.period);
        filter_by_provinces(&in_window, &self.provinces)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::all_provinces(Period::All)
    }
}

/// Keep records whose date falls within the trailing window
///
/// The window is `max_date - window_days ..= max_date` where `max_date` is
/// the latest date in the input. An empty input yields an empty output.
pub fn filter_by_period(records: &[TourismRecord], period: Period) -> Vec<TourismRecord> {
    let Some(days) = period.window_days() else {
        return records.to_vec();
    };
    let Some(max_date) = records.iter().map(|r| r.date).max() else {
        return Vec::new();
    };

    let cutoff = max_date - Duration::days(days);
    records
        .iter()
        .filter(|r| r.date >= cutoff)
        .cloned()
        .collect()
}

/// Keep records whose province is in the selection, preserving order
pub fn filter_by_provinces(
    records: &[TourismRecord],
    provinces: &BTreeSet<Province>,
) -> Vec<TourismRecord> {
    records
        .iter()
        .filter(|r| provinces.contains(&r.province))
        .cloned()
        .collect()
}
