//! Summary scalars and grouped aggregates over a filtered record set
//!
//! All operations are pure reductions. Sums over an empty input yield the
//! reduction identity; means over an empty input yield `None` rather than
//! a misleading zero. Grouped aggregates only contain keys that actually
//! contributed records — provinces or months with no data in the window
//! are absent, never zero-filled.
//!
//! Grouped results use `BTreeMap` so iteration order is deterministic:
//! when two keys share a maximum value, a strict `>` scan picks the
//! lexically-first province or the lowest month number. That tie-break is
//! part of the contract and is covered by tests.

use crate::record::{Province, TourismRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-province visitor and revenue sums
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProvinceTotals {
    pub visitors: u64,
    pub revenue: f64,
}

/// Arithmetic means of the per-record quality metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanScores {
    /// Mean stay length in days
    pub average_stay: f64,
    /// Mean satisfaction score
    pub satisfaction: f64,
}

/// Aggregated dashboard statistics for one filtered record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub total_visitors: u64,
    pub total_revenue: f64,
    /// `None` when the filtered set is empty
    pub means: Option<MeanScores>,
    pub by_province: BTreeMap<Province, ProvinceTotals>,
    /// Mean visitors per month-of-year (1..=12) across all years present
    pub by_month: BTreeMap<u32, f64>,
}

impl AggregateResult {
    /// Compute every aggregate in one pass over the filtered set
    pub fn from_records(records: &[TourismRecord]) -> Self {
        let (total_visitors, total_revenue) = totals(records);
        Self {
            total_visitors,
            total_revenue,
            means: means(records),
            by_province: by_province(records),
            by_month: by_month(records),
        }
    }

    /// Province with the maximum total visitors, with its total
    ///
    /// Ties resolve to the lexically-first province name; `None` when no
    /// province contributed records.
    pub fn top_province(&self) -> Option<(Province, u64)> {
        let mut best: Option<(Province, u64)> = None;
        for (&province, totals) in &self.by_province {
            match best {
                Some((_, visitors)) if totals.visitors <= visitors => {}
                _ => best = Some((province, totals.visitors)),
            }
        }
        best
    }
}

/// Sum visitors and revenue over the full filtered set
///
/// Empty input yields `(0, 0.0)`, the standard reduction identity.
pub fn totals(records: &[TourismRecord]) -> (u64, f64) {
    let visitors = records.iter().map(|r| r.visitors).sum();
    let revenue = records.iter().map(|r| r.revenue).sum();
    (visitors, revenue)
}

/// Arithmetic means of average stay and satisfaction
///
/// The mean of an empty set is undefined; this returns `None` rather than
/// dividing by zero, since a silent 0.0 would read as a terrible
/// satisfaction score downstream.
pub fn means(records: &[TourismRecord]) -> Option<MeanScores> {
    if records.is_empty() {
        return None;
    }

    let count = records.len() as f64;
    let stay_sum: f64 = records.iter().map(|r| r.average_stay).sum();
    let satisfaction_sum: f64 = records.iter().map(|r| r.satisfaction).sum();

    Some(MeanScores {
        average_stay: stay_sum / count,
        satisfaction: satisfaction_sum / count,
    })
}

/// Visitor and revenue sums grouped by province
pub fn by_province(records: &[TourismRecord]) -> BTreeMap<Province, ProvinceTotals> {
    let mut grouped: BTreeMap<Province, ProvinceTotals> = BTreeMap::new();
    for record in records {
        let entry = grouped.entry(record.province).or_default();
        entry.visitors += record.visitors;
        entry.revenue += record.revenue;
    }
    grouped
}

/// Mean visitors per month-of-year, aggregated across all years present
pub fn by_month(records: &[TourismRecord]) -> BTreeMap<u32, f64> {
    use chrono::Datelike;

    let mut sums: BTreeMap<u32, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.date.month()).or_insert((0, 0));
        entry.0 += record.visitors;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(month, (sum, count))| (month, sum as f64 / count as f64))
        .collect()
}
