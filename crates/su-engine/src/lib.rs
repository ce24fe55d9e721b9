//! The Sales-Up session engine.
//!
//! Walks a [`su_core::ScenarioDeck`] under a time budget, accumulating
//! category scores and pricing effects, and produces an immutable session
//! record when a terminal boundary is reached. The engine is driven by
//! discrete external events (answer clicks, timer ticks, navigation,
//! restart); it holds no threads and performs no I/O of its own —
//! persistence is a collaborator behind the [`store::SessionStore`] trait.

/// Named, overridable session constants and rule tables.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Proposal and sale rule evaluation.
pub mod pricing;
/// The immutable completed-session record and its rating.
pub mod record;
/// Best-effort persistence of completed sessions.
pub mod recorder;
/// Per-category and total score bookkeeping.
pub mod score;
/// The traversal state machine.
pub mod session;
/// The persistence collaborator trait and an in-memory store.
pub mod store;
/// The per-session countdown timer.
pub mod timer;

/// Re-export configuration.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export pricing types.
pub use pricing::{PricingEngine, PricingOp, PricingRule, SaleRule};
/// Re-export record types.
pub use record::{AnsweredQuestion, SessionRecord};
/// Re-export the recorder entry point.
pub use recorder::persist_session;
/// Re-export the score accumulator.
pub use score::Score;
/// Re-export the state machine.
pub use session::{GameSession, Phase};
/// Re-export store types.
pub use store::{LifetimeStats, MemoryStore, SessionStore, StoreError, StoreResult};
/// Re-export timer types.
pub use timer::{CountdownTimer, TimerStop};
