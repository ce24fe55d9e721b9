//! Per-category and total score bookkeeping.

use log::warn;
use serde::{Deserialize, Serialize};
use su_core::Category;

/// Accumulated points per category, plus the session total.
///
/// The total is the running sum of every awarded point, including points
/// awarded under a category outside the fixed set, so the category buckets
/// and the total can legitimately diverge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Greeting bucket.
    pub greeting: i64,
    /// Proposal bucket.
    pub proposal: i64,
    /// Closing bucket.
    pub closing: i64,
    /// CSUS bucket.
    pub csus: i64,
    /// Calificare bucket.
    pub calificare: i64,
    /// Sum of all awarded points, regardless of category.
    pub total: i64,
}

impl Score {
    /// A fresh all-zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Award points under a raw category string.
    ///
    /// A known category increments its bucket and the total; an unknown one
    /// is skipped for bucketing (logged, never an error) but still counts
    /// toward the total.
    pub fn apply(&mut self, category: &str, points: i64) {
        match Category::parse(category) {
            Some(Category::Greeting) => self.greeting += points,
            Some(Category::Proposal) => self.proposal += points,
            Some(Category::Closing) => self.closing += points,
            Some(Category::Csus) => self.csus += points,
            Some(Category::Calificare) => self.calificare += points,
            None => warn!("unknown score category \"{category}\", counting toward total only"),
        }
        self.total += points;
    }

    /// Read a bucket by category.
    pub fn bucket(&self, category: Category) -> i64 {
        match category {
            Category::Greeting => self.greeting,
            Category::Proposal => self.proposal,
            Category::Closing => self.closing,
            Category::Csus => self.csus,
            Category::Calificare => self.calificare,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn known_category_hits_bucket_and_total() {
        let mut score = Score::new();
        score.apply("greeting", 5);
        assert_eq!(score.greeting, 5);
        assert_eq!(score.total, 5);
    }

    #[test]
    fn unknown_category_hits_total_only() {
        let mut score = Score::new();
        score.apply("smalltalk", 7);
        assert_eq!(score.total, 7);
        for cat in Category::ALL {
            assert_eq!(score.bucket(cat), 0);
        }
    }

    #[test]
    fn negative_points() {
        let mut score = Score::new();
        score.apply("closing", 10);
        score.apply("closing", -4);
        assert_eq!(score.closing, 6);
        assert_eq!(score.total, 6);
    }

    #[test]
    fn case_insensitive_category() {
        let mut score = Score::new();
        score.apply("Greeting", 3);
        assert_eq!(score.greeting, 3);
    }

    #[test]
    fn serde_field_names() {
        let mut score = Score::new();
        score.apply("csus", 2);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["csus"], 2);
        assert_eq!(json["total"], 2);
    }

    proptest! {
        // The final score for a fixed multiset of applications does not
        // depend on application order.
        #[test]
        fn accumulation_is_commutative(
            entries in proptest::collection::vec(
                (prop_oneof![
                    Just("greeting".to_string()),
                    Just("proposal".to_string()),
                    Just("closing".to_string()),
                    Just("csus".to_string()),
                    Just("calificare".to_string()),
                    Just("other".to_string()),
                ], -50i64..50),
                0..30,
            )
        ) {
            let mut forward = Score::new();
            for (cat, pts) in &entries {
                forward.apply(cat, *pts);
            }
            let mut backward = Score::new();
            for (cat, pts) in entries.iter().rev() {
                backward.apply(cat, *pts);
            }
            prop_assert_eq!(forward, backward);
        }

        // total equals the sum of all applied points.
        #[test]
        fn total_is_running_sum(
            entries in proptest::collection::vec(
                ("[a-z]{1,10}", -100i64..100),
                0..30,
            )
        ) {
            let mut score = Score::new();
            let mut expected = 0;
            for (cat, pts) in &entries {
                score.apply(cat, *pts);
                expected += pts;
            }
            prop_assert_eq!(score.total, expected);
        }
    }
}
