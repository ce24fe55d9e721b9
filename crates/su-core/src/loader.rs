//! Raw deck records as they appear in the JSON source.
//!
//! Deck authors are sloppy about numbers: ids and points arrive as either
//! JSON numbers or strings ("28"). Everything numeric is coerced to `i64`
//! once, at load time, so the rest of the system only ever sees integers.

use serde::Deserialize;

use crate::error::{DeckError, DeckResult};

/// A JSON value that is either a number or a string holding one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    /// Already a number.
    Int(i64),
    /// A string to be parsed.
    Str(String),
}

impl IntOrString {
    /// Coerce to `i64`, naming the field in the error.
    pub fn to_i64(&self, field: &'static str) -> DeckResult<i64> {
        match self {
            IntOrString::Int(n) => Ok(*n),
            IntOrString::Str(s) => s.trim().parse().map_err(|_| DeckError::BadNumber {
                field,
                value: s.clone(),
            }),
        }
    }
}

/// A raw answer record, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnswer {
    /// Answer id (number or string).
    pub id: IntOrString,
    /// Display text.
    pub text: String,
    /// Raw category string.
    pub category: String,
    /// Points (number or string).
    pub points: IntOrString,
    /// Id of the next slide (number or string).
    pub next: IntOrString,
}

/// A raw slide record, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlide {
    /// Slide id (number or string).
    pub id: IntOrString,
    /// Question text.
    pub question: String,
    /// Answers; absent or empty means terminal/pass-through.
    #[serde(default)]
    pub answers: Option<Vec<RawAnswer>>,
}
