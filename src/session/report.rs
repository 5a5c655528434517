use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, ExpenseRecord};

/// How monthly buckets with no records are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyBuckets {
    /// List only months that have at least one record.
    Omit,
    /// Fill every month between the earliest and latest record with 0.0.
    ZeroFill,
}

/// Total spend for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// First day of the bucket's month.
    pub month: NaiveDate,
    pub total: f64,
}

/// Sum of amounts per category. Categories with no records are absent from
/// the map, not zero-filled.
pub fn category_totals(records: &[ExpenseRecord]) -> BTreeMap<Category, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.category).or_insert(0.0) += record.amount;
    }
    totals
}

/// Buckets records by the calendar month of their scan date, in ascending
/// month order. Recomputed from scratch on every call.
pub fn monthly_totals(records: &[ExpenseRecord], empty: EmptyBuckets) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *buckets.entry(month_of(record.date)).or_insert(0.0) += record.amount;
    }

    if empty == EmptyBuckets::ZeroFill {
        if let (Some(first), Some(last)) = (
            buckets.keys().next().copied(),
            buckets.keys().next_back().copied(),
        ) {
            let mut month = first;
            while month < last {
                month = next_month(month);
                buckets.entry(month).or_insert(0.0);
            }
        }
    }

    buckets
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

fn month_of(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is valid")
}

fn next_month(month: NaiveDate) -> NaiveDate {
    let (year, next) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, next, 1).expect("first of month is valid")
}
