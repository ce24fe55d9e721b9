use crate::slide::{AnswerId, SlideId};

/// Alias for `Result<T, DeckError>`.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur when loading or validating a scenario deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// A numeric-or-string field could not be coerced to an integer.
    #[error("field '{field}' is not a number: \"{value}\"")]
    BadNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw string value.
        value: String,
    },

    /// Two slides in the deck share the same id.
    #[error("duplicate slide id: {0}")]
    DuplicateSlide(SlideId),

    /// Two answers on the same slide share the same id.
    #[error("duplicate answer id {answer} on slide {slide}")]
    DuplicateAnswer {
        /// The owning slide.
        slide: SlideId,
        /// The duplicated answer id.
        answer: AnswerId,
    },

    /// The configured entry slide is absent from the deck.
    ///
    /// Fatal: a session cannot start without its entry point.
    #[error("entry slide {0} not found in deck")]
    MissingEntry(SlideId),

    /// The deck JSON could not be parsed.
    #[error("deck parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The deck file could not be read.
    #[error("deck read error: {0}")]
    Io(#[from] std::io::Error),
}
