//! Calendar-month seasonality profile
//!
//! Works off the by-month aggregate: mean visitors per month-of-year
//! across every year in the filtered window, with the peak month picked
//! by a strict comparison so ties resolve to the lowest month number.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Month-of-year with the highest mean visitor volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPeak {
    /// Month-of-year, 1..=12
    pub month: u32,
    pub mean_visitors: f64,
}

/// Identify the peak month in a by-month aggregate
///
/// Returns `None` when the mapping is empty (no seasonal data). Ties
/// resolve to the lowest month number: the map iterates in ascending
/// month order and only a strictly greater mean displaces the current
/// peak.
pub fn peak_month(by_month: &BTreeMap<u32, f64>) -> Option<SeasonalPeak> {
    let mut peak: Option<SeasonalPeak> = None;
    for (&month, &mean_visitors) in by_month {
        match peak {
            Some(current) if mean_visitors <= current.mean_visitors => {}
            _ => {
                peak = Some(SeasonalPeak {
                    month,
                    mean_visitors,
                })
            }
        }
    }
    peak
}

/// English month name for a 1-based month-of-year
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "unknown",
    }
}
