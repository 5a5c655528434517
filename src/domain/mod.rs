//! Domain models for interpreted receipts.

pub mod category;
pub mod record;

pub use category::{Category, UnknownCategory};
pub use record::ExpenseRecord;
