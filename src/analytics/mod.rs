//! Metrics aggregation and insight engine
//!
//! This module is the core of the dashboard: the sequence of filtering,
//! aggregation, trend and seasonality analysis, and rule-based insight
//! extraction applied to the record store before anything reaches a chart
//! or KPI card.
//!
//! # Overview
//!
//! - [`aggregate`] — summary scalars and grouped aggregates
//! - [`trend`] — head-vs-tail growth signal over per-period totals
//! - [`seasonality`] — calendar-month profile and peak month
//! - [`insight`] — ordered, typed findings for the text panels
//! - [`MetricsEngine`] — orchestrates one dashboard pass end to end
//!
//! Every stage is a pure, synchronous transform over immutable inputs.
//! Independent pipelines (say, per province selection) can run in parallel
//! with no shared state and no coordination.
//!
//! # Example
//!
//! ```
//! use nomadix::analytics::MetricsEngine;
//! use nomadix::filter::{FilterSpec, Period};
//! use nomadix::generator::{self, SampleDataConfig};
//!
//! let store = generator::generate(&SampleDataConfig::default());
//! let engine = MetricsEngine::default();
//!
//! let summary = engine.summarize(&store, &FilterSpec::all_provinces(Period::LastYear));
//! println!("visitors: {}", summary.aggregates.total_visitors);
//! for insight in &summary.insights {
//!     println!("- {}", insight);
//! }
//! ```

pub mod aggregate;
pub mod insight;
pub mod seasonality;
pub mod trend;

#[cfg(test)]
pub mod test_utils;



use crate::error::Result;
use crate::filter::FilterSpec;
use crate::record::RecordStore;
use aggregate::AggregateResult;
use chrono::NaiveDate;
use insight::Insight;
use seasonality::SeasonalPeak;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use trend::TrendSummary;

/// Configuration for the metrics engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Periods in each trend comparison window
    pub trend_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { trend_window: 3 }
    }
}

/// Everything the rendering layer needs for one dashboard pass
///
/// Built fresh from the filtered record set on every invocation; nothing
/// persists between passes. Absent fields mean the corresponding analysis
/// had no data to work with, never that it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Earliest reporting period that passed the filters
    pub period_start: Option<NaiveDate>,
    /// Latest reporting period that passed the filters
    pub period_end: Option<NaiveDate>,
    /// Number of records that passed the filters
    pub record_count: usize,
    pub aggregates: AggregateResult,
    /// `None` when the trend is undefined for the filtered set
    pub trend: Option<TrendSummary>,
    /// `None` when no month contributed records
    pub seasonality: Option<SeasonalPeak>,
    /// Ordered findings: top destination, trend, peak season
    pub insights: Vec<Insight>,
}

impl DashboardSummary {
    /// Render the summary as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the summary as JSON for external visualization tooling
    pub fn export_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Stateless orchestrator for the metrics pipeline
///
/// Applies a [`FilterSpec`] to a [`RecordStore`], runs every analysis
/// stage, and assembles a [`DashboardSummary`]. The engine holds only
/// configuration, so one instance can serve any number of stores and
/// filters.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    config: EngineConfig,
}

impl MetricsEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run one full dashboard pass
    ///
    /// Recoverable analysis outcomes (`NoData`, `UndefinedTrend`) become
    /// absent fields in the summary; the corresponding insights are
    /// omitted rather than surfaced as errors.
    pub fn summarize(&self, store: &RecordStore, filter: &FilterSpec) -> DashboardSummary {
        let records = filter.apply(store);
        debug!(
            total = store.len(),
            filtered = records.len(),
            period = ?filter.period,
            provinces = filter.provinces.len(),
            "filtered record store"
        );

        let aggregates = AggregateResult::from_records(&records);

        let series = trend::period_totals(&records);
        let trend = match trend::analyze(&series, self.config.trend_window) {
            Ok(summary) => Some(summary),
            Err(err) => {
                debug!(%err, "trend omitted");
                None
            }
        };

        let seasonality = seasonality::peak_month(&aggregates.by_month);
        let insights = insight::generate(&aggregates, trend.as_ref(), seasonality.as_ref());

        DashboardSummary {
            period_start: records.iter().map(|r| r.date).min(),
            period_end: records.iter().map(|r| r.date).max(),
            record_count: records.len(),
            aggregates,
            trend,
            seasonality,
            insights,
        }
    }
}
