//! Receipt interpretation: amount extraction and category classification over
//! raw OCR text. Pure and total; all I/O lives at the callers.

pub mod amount;
pub mod classifier;

pub use amount::extract_amount;
pub use classifier::{classify, Classification};

use crate::domain::Category;

/// Description used when the text has no non-blank line to display.
pub const DEFAULT_DESCRIPTION: &str = "Receipt scan";

/// Everything the engine can infer from one receipt's text.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub amount: f64,
    pub category: Category,
    pub confidence: f64,
    pub description: String,
}

/// Runs the amount extractor and the category classifier over the same text.
/// The two passes are independent and share no state.
pub fn interpret(text: &str) -> Interpretation {
    let amount = extract_amount(text);
    let Classification {
        category,
        confidence,
    } = classify(text);

    Interpretation {
        amount,
        category,
        confidence,
        description: derive_description(text),
    }
}

/// First non-blank line of the text, trimmed, for display purposes.
fn derive_description(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpret_combines_both_passes() {
        let result = interpret("Corner Cafe\nLatte 4.50\nTotal $6.75");
        assert_eq!(result.amount, 6.75);
        assert_eq!(result.category, Category::Food);
        assert_eq!(result.description, "Corner Cafe");
    }

    #[test]
    fn blank_lines_are_skipped_for_description() {
        let result = interpret("\n   \nShell Gas Station\n$30.00");
        assert_eq!(result.description, "Shell Gas Station");
    }

    #[test]
    fn empty_text_still_interprets() {
        let result = interpret("");
        assert_eq!(result.amount, 0.0);
        assert_eq!(result.category, Category::Other);
        assert_eq!(result.description, DEFAULT_DESCRIPTION);
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }
}
