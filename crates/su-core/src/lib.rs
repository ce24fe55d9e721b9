//! Core types for the Sales-Up scenario engine: decks, slides, answers,
//! and scoring categories.
//!
//! This crate defines the data model the traversal engine walks. A deck is
//! loaded once from raw records (JSON with numeric-or-string ids), normalized
//! to integer ids, and immutable afterwards: you can construct a
//! [`ScenarioDeck`] programmatically or deserialize one from JSON.

/// Scoring categories (fixed enumeration of skill dimensions).
pub mod category;
/// The scenario deck: slide storage, lookup, and diagnostics.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// Raw-record deserialization and id normalization.
pub mod loader;
/// Slide and answer types with their identifiers.
pub mod slide;

/// Re-export category type.
pub use category::Category;
/// Re-export deck types.
pub use deck::{DeckReport, ScenarioDeck};
/// Re-export error types.
pub use error::{DeckError, DeckResult};
/// Re-export raw record types.
pub use loader::{RawAnswer, RawSlide};
/// Re-export slide types.
pub use slide::{Answer, AnswerId, Slide, SlideId};
