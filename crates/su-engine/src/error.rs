use su_core::{AnswerId, SlideId};

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The configured entry slide is not in the deck. Fatal at session start.
    #[error("entry slide {0} not found in deck")]
    MissingEntry(SlideId),

    /// An answer event arrived while the cursor is on a missing slide.
    #[error("current slide {0} not found in deck")]
    SlideNotFound(SlideId),

    /// An answer event arrived on a slide with no selectable answers.
    #[error("slide {0} has no selectable answers")]
    NoAnswers(SlideId),

    /// The chosen answer id does not exist on the current slide.
    #[error("answer {answer} not found on slide {slide}")]
    UnknownAnswer {
        /// The current slide.
        slide: SlideId,
        /// The unmatched answer id.
        answer: AnswerId,
    },
}
