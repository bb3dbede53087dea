//! Shared test utilities for the analytics module
//!
//! Record builders and fixture scenarios reused across the analytics test
//! modules.

use crate::record::{Province, RecordStore, TourismRecord};
use chrono::NaiveDate;

/// First day of a month, panicking on invalid input (tests only)
pub fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Record with plausible quality metrics derived from the visitor count
pub fn record(date: NaiveDate, province: Province, visitors: u64) -> TourismRecord {
    TourismRecord::new(date, province, visitors, visitors as f64 * 80.0, 3.5, 4.2)
}

/// Two provinces over three consecutive months: Luanda rising
/// [100, 110, 120], Benguela falling [50, 40, 30]
///
/// By-province totals come out to Luanda 330 and Benguela 120, and the
/// per-period totals are constant at 150.
pub fn two_province_scenario() -> Vec<TourismRecord> {
    let mut records = Vec::new();
    for (i, (luanda, benguela)) in [(100, 50), (110, 40), (120, 30)].into_iter().enumerate() {
        let date = month(2024, 1 + i as u32);
        records.push(record(date, Province::Luanda, luanda));
        records.push(record(date, Province::Benguela, benguela));
    }
    records
}

/// Store with `months` consecutive monthly records for every province,
/// all with the given visitor count
pub fn uniform_store(start: NaiveDate, months: u32, visitors: u64) -> RecordStore {
    use chrono::Months;

    let mut records = Vec::new();
    for offset in 0..months {
        let date = start.checked_add_months(Months::new(offset)).unwrap();
        for province in Province::ALL {
            records.push(record(date, province, visitors));
        }
    }
    RecordStore::from_records(records)
}
