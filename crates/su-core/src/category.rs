//! The fixed set of scored skill dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scored skill dimension.
///
/// Answers carry a free-form category string; only strings that parse to one
/// of these variants contribute to a per-category bucket. Anything else still
/// counts toward the session total, so parsing returns an `Option` instead of
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Opening the conversation with the customer.
    Greeting,
    /// Presenting a product proposal.
    Proposal,
    /// Closing the sale.
    Closing,
    /// Cross-sell / up-sell (CSUS).
    Csus,
    /// Qualifying the customer's needs.
    Calificare,
}

impl Category {
    /// All categories, in score-sheet order.
    pub const ALL: [Category; 5] = [
        Category::Greeting,
        Category::Proposal,
        Category::Closing,
        Category::Csus,
        Category::Calificare,
    ];

    /// Parse a raw category string (case-insensitive).
    ///
    /// Returns `None` for anything outside the fixed set.
    pub fn parse(raw: &str) -> Option<Category> {
        match raw.trim().to_lowercase().as_str() {
            "greeting" => Some(Category::Greeting),
            "proposal" => Some(Category::Proposal),
            "closing" => Some(Category::Closing),
            "csus" => Some(Category::Csus),
            "calificare" => Some(Category::Calificare),
            _ => None,
        }
    }

    /// The canonical lowercase name, as used in score sheets.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Proposal => "proposal",
            Category::Closing => "closing",
            Category::Csus => "csus",
            Category::Calificare => "calificare",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known() {
        assert_eq!(Category::parse("greeting"), Some(Category::Greeting));
        assert_eq!(Category::parse("CSUS"), Some(Category::Csus));
        assert_eq!(Category::parse("  Calificare "), Some(Category::Calificare));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Category::parse("smalltalk"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn all_names_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.name()), Some(cat));
        }
    }
}
