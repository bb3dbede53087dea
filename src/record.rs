//! Tourism record types and the immutable record store
//!
//! A [`TourismRecord`] is one province's reporting-period snapshot: visitor
//! count, revenue, average stay length, and satisfaction score for a single
//! calendar month. A [`RecordStore`] owns a sequence of such records and is
//! read-only from the engine's perspective; data loading and refresh belong
//! to the data source, not to this crate.

use crate::error::MetricsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting provinces covered by the dashboard
///
/// The variant order is the lexical order of the canonical names, and the
/// derived `Ord` follows it. That ordering is the documented tie-break used
/// when two provinces share a maximum aggregate value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Province {
    Benguela,
    Cabinda,
    #[serde(rename = "Huíla")]
    Huila,
    Luanda,
    Namibe,
}

impl Province {
    /// All reporting provinces, in tie-break order
    pub const ALL: [Province; 5] = [
        Province::Benguela,
        Province::Cabinda,
        Province::Huila,
        Province::Luanda,
        Province::Namibe,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Province::Benguela => "Benguela",
            Province::Cabinda => "Cabinda",
            Province::Huila => "Huíla",
            Province::Luanda => "Luanda",
            Province::Namibe => "Namibe",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Province {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Benguela" => Ok(Province::Benguela),
            "Cabinda" => Ok(Province::Cabinda),
            "Huíla" | "Huila" => Ok(Province::Huila),
            "Luanda" => Ok(Province::Luanda),
            "Namibe" => Ok(Province::Namibe),
            other => Err(MetricsError::UnknownProvince(other.to_string())),
        }
    }
}

/// One province's metrics for one reporting period
///
/// Reporting periods have month granularity; `date` is the period's
/// calendar date with the day-of-month normalized by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourismRecord {
    /// Reporting period (month granularity)
    pub date: NaiveDate,
    pub province: Province,
    /// Visitor count for the period
    pub visitors: u64,
    /// Revenue for the period, currency unit fixed per deployment
    pub revenue: f64,
    /// Mean stay length in days, positive
    pub average_stay: f64,
    /// Mean satisfaction score in [1.0, 5.0]
    pub satisfaction: f64,
}

impl TourismRecord {
    /// Create a new tourism record
    pub fn new(
        date: NaiveDate,
        province: Province,
        visitors: u64,
        revenue: f64,
        average_stay: f64,
        satisfaction: f64,
    ) -> Self {
        Self {
            date,
            province,
            visitors,
            revenue,
            average_stay,
            satisfaction,
        }
    }
}

/// Immutable in-memory sequence of tourism records
///
/// Invariant: the (date, province) pair is unique within a store — one
/// record per province per reporting period. Enforcing well-formedness is
/// the data source's responsibility; the engine treats the store as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<TourismRecord>,
}

impl RecordStore {
    /// Create a store from a record sequence
    pub fn from_records(records: Vec<TourismRecord>) -> Self {
        Self { records }
    }

    /// Read-only view of the records
    pub fn records(&self) -> &[TourismRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest reporting period present, `None` for an empty store
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    /// Latest reporting period present, `None` for an empty store
    ///
    /// Period windows are resolved against this date rather than wall-clock
    /// time, so filtering is deterministic for a given store.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }
}
