//! The scenario deck: an immutable directed graph of slides.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DeckError, DeckResult};
use crate::loader::RawSlide;
use crate::slide::{Answer, AnswerId, Slide, SlideId};

/// A loaded, normalized scenario deck.
///
/// Owns all slides and an index for O(1) lookup by id. The deck is loaded
/// once per session start and never mutated afterwards; all session state
/// lives in the traversal engine, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioDeck {
    slides: Vec<Slide>,
    index: HashMap<SlideId, usize>,
}

impl Serialize for ScenarioDeck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.slides.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScenarioDeck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slides = Vec::<Slide>::deserialize(deserializer)?;
        ScenarioDeck::new(slides).map_err(serde::de::Error::custom)
    }
}

impl ScenarioDeck {
    /// Build a deck from already-normalized slides.
    ///
    /// Rejects duplicate slide ids and duplicate answer ids within a slide;
    /// anything else (dangling `next` pointers, cycles) is legal.
    pub fn new(slides: Vec<Slide>) -> DeckResult<Self> {
        let mut index = HashMap::with_capacity(slides.len());
        for (pos, slide) in slides.iter().enumerate() {
            if index.insert(slide.id, pos).is_some() {
                return Err(DeckError::DuplicateSlide(slide.id));
            }
            let mut seen = HashSet::new();
            for answer in &slide.answers {
                if !seen.insert(answer.id) {
                    return Err(DeckError::DuplicateAnswer {
                        slide: slide.id,
                        answer: answer.id,
                    });
                }
            }
        }
        Ok(Self { slides, index })
    }

    /// Build a deck from raw records, coercing all numeric-or-string fields.
    pub fn from_records(records: Vec<RawSlide>) -> DeckResult<Self> {
        let mut slides = Vec::with_capacity(records.len());
        for record in records {
            let id = SlideId(record.id.to_i64("id")?);
            let mut answers = Vec::new();
            for raw in record.answers.unwrap_or_default() {
                answers.push(Answer {
                    id: AnswerId(raw.id.to_i64("answer.id")?),
                    text: raw.text,
                    category: raw.category,
                    points: raw.points.to_i64("answer.points")?,
                    next: SlideId(raw.next.to_i64("answer.next")?),
                });
            }
            slides.push(Slide {
                id,
                question: record.question,
                answers,
            });
        }
        Self::new(slides)
    }

    /// Parse a deck from a JSON array of raw slide records.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let records: Vec<RawSlide> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read and parse a deck from a JSON file.
    pub fn from_file(path: &Path) -> DeckResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a slide by id.
    pub fn get(&self, id: SlideId) -> Option<&Slide> {
        self.index.get(&id).map(|pos| &self.slides[*pos])
    }

    /// Whether the deck contains a slide with this id.
    pub fn contains(&self, id: SlideId) -> bool {
        self.index.contains_key(&id)
    }

    /// All slides, in source order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Check that a session can start at the given entry slide.
    ///
    /// A missing entry slide is a fatal configuration error, not something
    /// the traversal engine can recover from.
    pub fn validate_entry(&self, entry: SlideId) -> DeckResult<()> {
        if self.contains(entry) {
            Ok(())
        } else {
            Err(DeckError::MissingEntry(entry))
        }
    }

    /// Summarize the deck for diagnostics.
    pub fn report(&self) -> DeckReport {
        let answer_count = self.slides.iter().map(|s| s.answers.len()).sum();
        let mut dangling = Vec::new();
        for slide in &self.slides {
            for answer in &slide.answers {
                if !self.contains(answer.next) {
                    dangling.push((slide.id, answer.id, answer.next));
                }
            }
        }
        DeckReport {
            slide_count: self.slides.len(),
            answer_count,
            dangling,
        }
    }
}

/// Diagnostic summary of a deck.
///
/// Dangling `next` pointers are reported as warnings only: the engine
/// tolerates them at traversal time (they become a user-visible
/// "question not found" state), so they do not fail loading.
#[derive(Debug, Clone)]
pub struct DeckReport {
    /// Number of slides in the deck.
    pub slide_count: usize,
    /// Total number of answers across all slides.
    pub answer_count: usize,
    /// `(slide, answer, missing target)` for each answer whose `next`
    /// points outside the deck.
    pub dangling: Vec<(SlideId, AnswerId, SlideId)>,
}
