//! Named, overridable session constants and rule tables.

use su_core::SlideId;

use crate::pricing::{PricingRule, SaleRule};
use crate::timer::DEFAULT_BUDGET;

/// Configuration for a game session.
///
/// Defaults mirror the shipped scenario deck: entry at slide 1, scoring
/// summary at slide 22, closing-the-day at slide 38, a 300-second answer
/// budget, and the five rating tiers. Rule tables default to empty; pricing
/// is deck-specific data supplied by the host.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Slide the traversal starts at.
    pub entry_slide: SlideId,
    /// Designated scoring-summary slide.
    pub summary_slide: SlideId,
    /// Designated closing-the-day slide.
    pub closing_slide: SlideId,
    /// Answer-phase time budget, in seconds.
    pub timer_budget: u32,
    /// Ascending rating cut points over the total score.
    pub rating_cuts: [i64; 4],
    /// Rating tier labels, lowest band first.
    pub rating_labels: [String; 5],
    /// Proposal rules, in priority order.
    pub proposal_rules: Vec<PricingRule>,
    /// Sale rules, in priority order.
    pub sale_rules: Vec<SaleRule>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            entry_slide: SlideId(1),
            summary_slide: SlideId(22),
            closing_slide: SlideId(38),
            timer_budget: DEFAULT_BUDGET,
            rating_cuts: [15, 35, 55, 75],
            rating_labels: [
                "Lost in the store".to_string(),
                "Beginner".to_string(),
                "Advanced".to_string(),
                "Senior consultant".to_string(),
                "King of the Day".to_string(),
            ],
            proposal_rules: Vec::new(),
            sale_rules: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Set the entry slide.
    pub fn with_entry(mut self, id: impl Into<SlideId>) -> Self {
        self.entry_slide = id.into();
        self
    }

    /// Set the summary slide.
    pub fn with_summary(mut self, id: impl Into<SlideId>) -> Self {
        self.summary_slide = id.into();
        self
    }

    /// Set the closing slide.
    pub fn with_closing(mut self, id: impl Into<SlideId>) -> Self {
        self.closing_slide = id.into();
        self
    }

    /// Set the timer budget in seconds.
    pub fn with_timer_budget(mut self, seconds: u32) -> Self {
        self.timer_budget = seconds;
        self
    }

    /// Set the rating cut points.
    pub fn with_rating_cuts(mut self, cuts: [i64; 4]) -> Self {
        self.rating_cuts = cuts;
        self
    }

    /// Set the proposal rule table.
    pub fn with_proposal_rules(mut self, rules: Vec<PricingRule>) -> Self {
        self.proposal_rules = rules;
        self
    }

    /// Set the sale rule table.
    pub fn with_sale_rules(mut self, rules: Vec<SaleRule>) -> Self {
        self.sale_rules = rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.entry_slide, SlideId(1));
        assert_eq!(cfg.summary_slide, SlideId(22));
        assert_eq!(cfg.closing_slide, SlideId(38));
        assert_eq!(cfg.timer_budget, 300);
        assert_eq!(cfg.rating_cuts, [15, 35, 55, 75]);
        assert!(cfg.proposal_rules.is_empty());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_entry(5)
            .with_summary(10)
            .with_closing(11)
            .with_timer_budget(60);
        assert_eq!(cfg.entry_slide, SlideId(5));
        assert_eq!(cfg.summary_slide, SlideId(10));
        assert_eq!(cfg.closing_slide, SlideId(11));
        assert_eq!(cfg.timer_budget, 60);
    }
}
