//! Slides and answers, the nodes and edges of a scenario deck.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a slide, unique within a deck.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SlideId(pub i64);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SlideId {
    fn from(id: i64) -> Self {
        SlideId(id)
    }
}

/// Identifier of an answer, unique only within its owning slide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AnswerId(pub i64);

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AnswerId {
    fn from(id: i64) -> Self {
        AnswerId(id)
    }
}

/// One selectable choice on a slide.
///
/// The category is kept as the raw string from the deck source: unknown
/// categories are legal and still award their points to the session total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Answer id, unique within the owning slide.
    pub id: AnswerId,
    /// Display text.
    pub text: String,
    /// Raw category string (see [`crate::Category::parse`]).
    pub category: String,
    /// Points awarded when chosen. May be negative.
    pub points: i64,
    /// The slide the traversal moves to when this answer is chosen.
    /// Need not point forward; the deck is a directed graph, cycles included.
    pub next: SlideId,
}

/// One question node in the scenario deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide id, unique within the deck.
    pub id: SlideId,
    /// Question text shown to the participant.
    pub question: String,
    /// Selectable answers, in display order. Empty for terminal or
    /// pass-through nodes.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Slide {
    /// Whether this slide is a decision point (has at least one answer).
    pub fn is_answerable(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Look up an answer by id.
    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> Slide {
        Slide {
            id: SlideId(1),
            question: "How do you open?".to_string(),
            answers: vec![
                Answer {
                    id: AnswerId(1),
                    text: "Good morning!".to_string(),
                    category: "greeting".to_string(),
                    points: 5,
                    next: SlideId(2),
                },
                Answer {
                    id: AnswerId(2),
                    text: "What do you want?".to_string(),
                    category: "greeting".to_string(),
                    points: -3,
                    next: SlideId(3),
                },
            ],
        }
    }

    #[test]
    fn answerable() {
        assert!(slide().is_answerable());
        let terminal = Slide {
            id: SlideId(22),
            question: "Final score".to_string(),
            answers: vec![],
        };
        assert!(!terminal.is_answerable());
    }

    #[test]
    fn answer_lookup() {
        let s = slide();
        assert_eq!(s.answer(AnswerId(2)).unwrap().points, -3);
        assert!(s.answer(AnswerId(9)).is_none());
    }
}
