//! The persistence collaborator.
//!
//! The engine decides *what* gets recorded, never *how* it is stored: hosts
//! implement [`SessionStore`] over whatever backend they have. [`MemoryStore`]
//! is the reference implementation used by the CLI and the tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::SessionRecord;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a persistence backend can surface.
///
/// All of them are treated as best-effort by the recorder: logged, never
/// shown to the participant, never blocking gameplay.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend is unreachable or refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the payload.
    #[error("store rejected record: {0}")]
    Rejected(String),
}

/// Lifetime sales counters kept per owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    /// Total number of sales closed across all sessions.
    pub number_of_sales: i64,
    /// Total value sold across all sessions.
    pub total_sales: i64,
}

/// A backend that accepts completed-session records and lifetime counters.
pub trait SessionStore {
    /// Append a completed-session record.
    fn append_session(&mut self, record: &SessionRecord) -> StoreResult<()>;

    /// Read the owner's current lifetime counters.
    ///
    /// Owners with no history yet report zeroed counters, not an error.
    fn lifetime(&self, owner: &str) -> StoreResult<LifetimeStats>;

    /// Write back the owner's lifetime counters.
    fn put_lifetime(&mut self, owner: &str, stats: LifetimeStats) -> StoreResult<()>;
}

/// An in-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Vec<SessionRecord>,
    lifetime: HashMap<String, LifetimeStats>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All appended session records, in arrival order.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }
}

impl SessionStore for MemoryStore {
    fn append_session(&mut self, record: &SessionRecord) -> StoreResult<()> {
        self.sessions.push(record.clone());
        Ok(())
    }

    fn lifetime(&self, owner: &str) -> StoreResult<LifetimeStats> {
        Ok(self.lifetime.get(owner).copied().unwrap_or_default())
    }

    fn put_lifetime(&mut self, owner: &str, stats: LifetimeStats) -> StoreResult<()> {
        self.lifetime.insert(owner.to_string(), stats);
        Ok(())
    }
}
