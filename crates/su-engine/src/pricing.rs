//! Proposal and sale rule evaluation.
//!
//! Business value per scenario path is data, not code: the rule tables live
//! in [`crate::GameConfig`] and are matched here against `(slide, answer)`
//! pairs. Table order is priority order: matching rules apply as a
//! sequential fold, each seeing the previous rule's result.

use serde::{Deserialize, Serialize};
use su_core::{AnswerId, SlideId};

/// An operation a proposal rule applies to the running proposal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingOp {
    /// Overwrite the proposal, regardless of prior value.
    Set(i64),
    /// Add to the proposal, treating an absent proposal as 0.
    Add(i64),
    /// Discount the proposal by a percentage, rounding to the nearest
    /// integer. A no-op while no proposal has been set: the proposal stays
    /// absent rather than becoming 0 (preserved source behavior).
    SubtractPercent(i64),
}

impl PricingOp {
    /// Apply this operation to the current proposal value.
    pub fn apply(&self, current: Option<i64>) -> Option<i64> {
        match self {
            PricingOp::Set(v) => Some(*v),
            PricingOp::Add(v) => Some(current.unwrap_or(0) + v),
            PricingOp::SubtractPercent(pct) => {
                current.map(|p| ((p as f64) * (1.0 - (*pct as f64) / 100.0)).round() as i64)
            }
        }
    }
}

/// A proposal rule: when `(slide, answer)` is clicked, apply `op`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Trigger slide id.
    pub slide: SlideId,
    /// Trigger answer id.
    pub answer: AnswerId,
    /// Operation to apply to the proposal.
    pub op: PricingOp,
}

impl PricingRule {
    /// Construct a rule.
    pub fn new(slide: impl Into<SlideId>, answer: impl Into<AnswerId>, op: PricingOp) -> Self {
        Self {
            slide: slide.into(),
            answer: answer.into(),
            op,
        }
    }
}

/// A sale rule: when `(slide, answer)` is clicked, bank the current proposal
/// into the sale total and count one sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRule {
    /// Trigger slide id.
    pub slide: SlideId,
    /// Trigger answer id.
    pub answer: AnswerId,
}

impl SaleRule {
    /// Construct a rule.
    pub fn new(slide: impl Into<SlideId>, answer: impl Into<AnswerId>) -> Self {
        Self {
            slide: slide.into(),
            answer: answer.into(),
        }
    }
}

/// The mutable pricing state of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingEngine {
    proposal: Option<i64>,
    sale_total: i64,
    sales_count: u32,
}

impl PricingEngine {
    /// Fresh pricing state: no proposal, nothing sold.
    pub fn new() -> Self {
        Self::default()
    }

    /// The running proposal value, if any rule has set one.
    pub fn proposal(&self) -> Option<i64> {
        self.proposal
    }

    /// Sum of all banked proposals.
    pub fn sale_total(&self) -> i64 {
        self.sale_total
    }

    /// Number of closed sales.
    pub fn sales_count(&self) -> u32 {
        self.sales_count
    }

    /// Evaluate both rule tables against one answer-click event.
    ///
    /// The proposal pass runs first; the sale pass then banks the proposal
    /// value as left by this event's proposal pass. A sale with no proposal
    /// set banks nothing but still counts as a sale (the match is consumed).
    pub fn on_answer(
        &mut self,
        slide: SlideId,
        answer: AnswerId,
        proposal_rules: &[PricingRule],
        sale_rules: &[SaleRule],
    ) {
        for rule in proposal_rules {
            if rule.slide == slide && rule.answer == answer {
                self.proposal = rule.op.apply(self.proposal);
            }
        }
        for rule in sale_rules {
            if rule.slide == slide && rule.answer == answer {
                self.sale_total += self.proposal.unwrap_or(0);
                self.sales_count += 1;
            }
        }
    }

    /// Discard all pricing state (session restart).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
