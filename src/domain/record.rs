use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::engine::Interpretation;

/// One interpreted receipt. Immutable once created: records are appended to a
/// session and never edited or removed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    pub confidence: f64,
}

impl ExpenseRecord {
    /// Builds a record from an interpretation, stamping a fresh id and the
    /// supplied creation date. The date is the scan date, not a date parsed
    /// from the receipt text.
    pub fn from_interpretation(interpretation: Interpretation, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: interpretation.amount,
            category: interpretation.category,
            description: interpretation.description,
            date,
            confidence: interpretation.confidence,
        }
    }
}
