//! Rule-based insight extraction
//!
//! Turns the computed aggregates into a small ordered set of typed
//! findings for the dashboard's text panels. The generator is a pure
//! function: no side effects, no I/O, and absent inputs simply drop the
//! corresponding finding instead of failing.

use super::aggregate::AggregateResult;
use super::seasonality::{self, SeasonalPeak};
use super::trend::{TrendDirection, TrendSummary};
use crate::record::Province;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule-derived finding about the filtered window
///
/// Payloads are typed values; the `Display` impl provides reference
/// phrasing, but locale-aware formatting belongs to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Insight {
    /// Province with the most visitors in the window
    TopDestination { province: Province },
    /// Overall growth or decline of visitor volume
    Trend {
        direction: TrendDirection,
        /// Absolute delta, in percent
        magnitude_percent: f64,
    },
    /// Month-of-year with the highest mean visitor flow
    PeakSeason { month: u32 },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::TopDestination { province } => write!(
                f,
                "{} is the province with the most visitors in the selected period",
                province
            ),
            Insight::Trend {
                direction,
                magnitude_percent,
            } => {
                let word = match direction {
                    TrendDirection::Growth => "growth",
                    TrendDirection::Decline => "decline",
                };
                write!(f, "Tourism is in {} with a {:.1}% swing", word, magnitude_percent)
            }
            Insight::PeakSeason { month } => write!(
                f,
                "{} has the highest visitor flow on average",
                seasonality::month_name(*month)
            ),
        }
    }
}

/// Generate the ordered insight sequence for one dashboard pass
///
/// Emission order is fixed — top destination, trend, peak season — and
/// downstream renderers depend on it. Each finding is omitted when its
/// input is absent: an empty by-province aggregate, an undefined trend,
/// or no seasonal data.
pub fn generate(
    aggregates: &AggregateResult,
    trend: Option<&TrendSummary>,
    seasonality: Option<&SeasonalPeak>,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some((province, _)) = aggregates.top_province() {
        insights.push(Insight::TopDestination { province });
    }

    if let Some(summary) = trend {
        insights.push(Insight::Trend {
            direction: summary.direction,
            magnitude_percent: summary.delta_percent.abs(),
        });
    }

    if let Some(peak) = seasonality {
        insights.push(Insight::PeakSeason { month: peak.month });
    }

    insights
}
