//! Capability seams for the forecasting and clustering collaborators
//!
//! The dashboard's prediction and regional-profile views are backed by
//! model modules that live outside this crate. Their contract is small:
//! each is a pure function over the same filtered record sequence the
//! engine produces. The traits here pin that contract, and the baseline
//! implementations keep the seams exercised without pulling in any model
//! machinery.

use crate::analytics::aggregate;
use crate::analytics::trend;
use crate::record::{Province, TourismRecord};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One predicted future period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub visitors: f64,
}

/// Produces per-period visitor predictions from a filtered record sequence
pub trait Forecaster {
    fn forecast(&self, records: &[TourismRecord], periods: usize) -> Vec<ForecastPoint>;
}

/// Relative visitor-volume tier of a province within the filtered window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeTier {
    Low,
    Medium,
    High,
}

/// Group label assigned to a province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceCluster {
    pub province: Province,
    pub tier: VolumeTier,
}

/// Assigns group labels to the provinces present in a record sequence
pub trait Clusterer {
    fn cluster(&self, records: &[TourismRecord]) -> Vec<ProvinceCluster>;
}

/// Baseline forecaster: projects the mean of the trailing periods flat
/// into the future
#[derive(Debug, Clone)]
pub struct MeanForecaster {
    /// Number of trailing periods averaged for the projection
    pub window: usize,
}

impl Default for MeanForecaster {
    fn default() -> Self {
        Self { window: 3 }
    }
}

impl Forecaster for MeanForecaster {
    fn forecast(&self, records: &[TourismRecord], periods: usize) -> Vec<ForecastPoint> {
        if self.window == 0 {
            return Vec::new();
        }
        let series = trend::period_totals(records);
        let Some(&(last_date, _)) = series.last() else {
            return Vec::new();
        };

        let window = self.window.min(series.len());
        let tail_sum: u64 = series[series.len() - window..].iter().map(|&(_, v)| v).sum();
        let level = tail_sum as f64 / window as f64;

        (1..=periods)
            .filter_map(|ahead| {
                last_date
                    .checked_add_months(Months::new(ahead as u32))
                    .map(|date| ForecastPoint {
                        date,
                        visitors: level,
                    })
            })
            .collect()
    }
}

/// Baseline clusterer: tiers provinces by total visitors relative to the
/// mean province volume (above 1.5x is high, below 0.5x is low)
#[derive(Debug, Clone, Default)]
pub struct VolumeTierClusterer;

impl Clusterer for VolumeTierClusterer {
    fn cluster(&self, records: &[TourismRecord]) -> Vec<ProvinceCluster> {
        let by_province = aggregate::by_province(records);
        if by_province.is_empty() {
            return Vec::new();
        }

        let total: u64 = by_province.values().map(|t| t.visitors).sum();
        let mean = total as f64 / by_province.len() as f64;

        by_province
            .into_iter()
            .map(|(province, totals)| {
                let ratio = totals.visitors as f64 / mean;
                let tier = if ratio > 1.5 {
                    VolumeTier::High
                } else if ratio < 0.5 {
                    VolumeTier::Low
                } else {
                    VolumeTier::Medium
                };
                ProvinceCluster { province, tier }
            })
            .collect()
    }
}
