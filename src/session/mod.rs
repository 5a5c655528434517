//! Session-scoped record collection and its derived views.

pub mod report;

pub use report::{EmptyBuckets, MonthlyTotal};

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::{Category, ExpenseRecord};
use crate::engine;

/// One interactive scanning session.
///
/// Owns the append-only record collection and the running total. Appending via
/// [`Session::record_scan`] is the only mutation; the `&mut self` receiver is
/// what enforces the single-writer rule, so two record builds can never
/// interleave and the running total cannot tear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    records: Vec<ExpenseRecord>,
    running_total: f64,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            running_total: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Interprets one receipt's recognized text and appends the resulting
    /// record, stamped with today's date. Returns a view of the new record.
    ///
    /// Total over any text: a scan with no amounts and no keyword matches
    /// still appends a visible record the user can correct by hand.
    pub fn record_scan(&mut self, text: &str) -> &ExpenseRecord {
        self.record_scan_on(text, Local::now().date_naive())
    }

    /// Same as [`Session::record_scan`] with an explicit scan date, for
    /// backdated imports and deterministic tests.
    pub fn record_scan_on(&mut self, text: &str, date: NaiveDate) -> &ExpenseRecord {
        let record = ExpenseRecord::from_interpretation(engine::interpret(text), date);
        debug!(
            amount = record.amount,
            category = %record.category,
            confidence = record.confidence,
            "recorded scan"
        );
        self.running_total += record.amount;
        self.records.push(record);
        self.records.last().expect("record was just appended")
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Cumulative sum of all recorded amounts, folded on each append rather
    /// than stored independently of the collection.
    pub fn running_total(&self) -> f64 {
        self.running_total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Per-category amount sums; categories without records are absent.
    /// Recomputed from the collection on every call, never cached.
    pub fn category_totals(&self) -> BTreeMap<Category, f64> {
        report::category_totals(&self.records)
    }

    /// Per-month amount sums over the records' scan dates.
    pub fn monthly_totals(&self, empty: EmptyBuckets) -> Vec<MonthlyTotal> {
        report::monthly_totals(&self.records, empty)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
