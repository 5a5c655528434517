use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of spending categories a receipt can be filed under.
///
/// `Other` is the fallback used when no keyword matches. Variant order here is
/// the order the classifier evaluates categories in, which decides ties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Office,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Other,
}

impl Category {
    /// Classifier evaluation order. `Other` carries no keywords and is not listed.
    pub const TAXONOMY: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Office,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
    ];

    /// Keywords associated with this category. Static configuration, not
    /// learned; sets are not required to be disjoint across categories.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Food => &[
                "restaurant",
                "cafe",
                "food",
                "dining",
                "lunch",
                "dinner",
                "breakfast",
                "pizza",
                "burger",
            ],
            Category::Transport => &[
                "uber", "taxi", "gas", "fuel", "parking", "metro", "bus", "train",
            ],
            Category::Office => &[
                "office",
                "supplies",
                "stationery",
                "computer",
                "software",
                "subscription",
            ],
            Category::Utilities => &["electric", "water", "internet", "phone", "utility", "bill"],
            Category::Entertainment => &[
                "movie",
                "cinema",
                "game",
                "entertainment",
                "music",
                "streaming",
            ],
            Category::Healthcare => &[
                "pharmacy", "doctor", "hospital", "medical", "health", "clinic",
            ],
            Category::Shopping => &[
                "amazon",
                "store",
                "shop",
                "retail",
                "clothing",
                "electronics",
            ],
            Category::Other => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Office => "office",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "office" => Ok(Category::Office),
            "utilities" => Ok(Category::Utilities),
            "entertainment" => Ok(Category::Entertainment),
            "healthcare" => Ok(Category::Healthcare),
            "shopping" => Ok(Category::Shopping),
            "other" => Ok(Category::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_taxonomy_category_has_keywords() {
        for category in Category::TAXONOMY {
            assert!(!category.keywords().is_empty(), "{category} has no keywords");
        }
    }

    #[test]
    fn labels_round_trip() {
        for category in Category::TAXONOMY.into_iter().chain([Category::Other]) {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn fallback_carries_no_keywords() {
        assert!(Category::Other.keywords().is_empty());
    }
}
