use crate::domain::Category;

const BASE_CONFIDENCE: f64 = 0.6;
const CONFIDENCE_PER_MATCH: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.95;

/// Category decision together with a heuristic certainty estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub confidence: f64,
}

/// Scores the text against the fixed keyword taxonomy.
///
/// Each category scores one point per distinct keyword occurring anywhere in
/// the lowercased text; repeats of the same keyword do not add up. The
/// strictly highest score wins, ties keep the category evaluated first in
/// taxonomy order, and an all-zero board falls back to [`Category::Other`].
/// Total over every input, including the empty string.
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();

    let mut best = Category::Other;
    let mut best_score = 0usize;
    for category in Category::TAXONOMY {
        let score = category
            .keywords()
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .count();
        if score > best_score {
            best_score = score;
            best = category;
        }
    }

    Classification {
        category: best,
        confidence: confidence_for(best_score),
    }
}

/// Saturating confidence in keyword-match count: floored at 0.6 because even a
/// single match beats chance, capped at 0.95 to never claim near-certainty.
/// The fallback scores zero and therefore reports the 0.6 floor as well.
fn confidence_for(score: usize) -> f64 {
    (BASE_CONFIDENCE + CONFIDENCE_PER_MATCH * score as f64).min(MAX_CONFIDENCE)
}
