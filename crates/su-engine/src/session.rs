//! The traversal state machine.
//!
//! `GameSession` holds the cursor and every mutable accumulator of one
//! playthrough. It is driven by discrete external events (answer clicks,
//! timer ticks, navigation intents, restart) dispatched one at a time; the
//! engine itself never spawns work or blocks. A multi-threaded host must
//! serialize all event dispatch behind one lock or one owning task.

use chrono::{DateTime, Utc};
use su_core::{AnswerId, ScenarioDeck, Slide, SlideId};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::pricing::PricingEngine;
use crate::record::{AnsweredQuestion, SessionRecord, rating_label};
use crate::score::Score;
use crate::timer::CountdownTimer;

/// The state the traversal is in, derived from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The current slide has selectable answers.
    AwaitingAnswer,
    /// The cursor is on the designated scoring-summary slide.
    Summary,
    /// The cursor is on the designated closing-the-day slide.
    Closing,
    /// An answerless slide that is neither summary nor closing; the host
    /// offers navigation instead of answers.
    PassThrough,
    /// The cursor references a slide missing from the deck. Terminal;
    /// only a restart recovers.
    NotFound,
}

/// An interactive game session over an immutable scenario deck.
#[derive(Debug)]
pub struct GameSession {
    deck: ScenarioDeck,
    config: GameConfig,
    session_id: Uuid,
    owner_id: String,
    started_at: DateTime<Utc>,
    cursor: SlideId,
    score: Score,
    pricing: PricingEngine,
    timer: CountdownTimer,
    log: Vec<AnsweredQuestion>,
    time_up: bool,
    duration: Option<u64>,
    recorded: bool,
    completed: Option<SessionRecord>,
}

impl GameSession {
    /// Start a session at the configured entry slide.
    ///
    /// Fails if the entry slide is absent from the deck, a fatal
    /// configuration error; the caller never reaches `AwaitingAnswer`.
    pub fn new(
        deck: ScenarioDeck,
        config: GameConfig,
        owner_id: impl Into<String>,
    ) -> EngineResult<Self> {
        deck.validate_entry(config.entry_slide)
            .map_err(|_| EngineError::MissingEntry(config.entry_slide))?;

        let mut session = Self {
            cursor: config.entry_slide,
            timer: CountdownTimer::new(config.timer_budget),
            deck,
            config,
            session_id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            started_at: Utc::now(),
            score: Score::new(),
            pricing: PricingEngine::new(),
            log: Vec::new(),
            time_up: false,
            duration: None,
            recorded: false,
            completed: None,
        };
        session.enter_cursor();
        Ok(session)
    }

    /// The unique id of the current session. Changes on restart.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The session owner.
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// The deck being traversed.
    pub fn deck(&self) -> &ScenarioDeck {
        &self.deck
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current cursor position.
    pub fn cursor(&self) -> SlideId {
        self.cursor
    }

    /// The slide under the cursor, if it exists.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.cursor)
    }

    /// The running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// The running proposal value.
    pub fn proposal(&self) -> Option<i64> {
        self.pricing.proposal()
    }

    /// Sum of all banked proposals.
    pub fn sale_total(&self) -> i64 {
        self.pricing.sale_total()
    }

    /// Number of closed sales.
    pub fn sales_count(&self) -> u32 {
        self.pricing.sales_count()
    }

    /// Seconds left on the answer budget.
    pub fn remaining_time(&self) -> u32 {
        self.timer.remaining()
    }

    /// Whether the time budget expired.
    pub fn time_up(&self) -> bool {
        self.time_up
    }

    /// The captured answering-phase duration, once captured.
    pub fn duration_seconds(&self) -> Option<u64> {
        self.duration
    }

    /// The answer log so far, in traversal order.
    pub fn log(&self) -> &[AnsweredQuestion] {
        &self.log
    }

    /// The finalized record, if a terminal boundary has been reached.
    pub fn completed(&self) -> Option<&SessionRecord> {
        self.completed.as_ref()
    }

    /// Take the finalized record for persistence, leaving the guard in
    /// place: the record is built at most once per session id even when both
    /// summary and closing boundaries are reached in one run.
    pub fn take_completed(&mut self) -> Option<SessionRecord> {
        self.completed.take()
    }

    /// Derive the current phase from the cursor.
    pub fn phase(&self) -> Phase {
        match self.deck.get(self.cursor) {
            None => Phase::NotFound,
            Some(_) if self.cursor == self.config.summary_slide => Phase::Summary,
            Some(_) if self.cursor == self.config.closing_slide => Phase::Closing,
            Some(slide) if slide.is_answerable() => Phase::AwaitingAnswer,
            Some(_) => Phase::PassThrough,
        }
    }

    /// Dispatch an answer-click event.
    ///
    /// Applies pricing rules, then the score, appends exactly one log entry,
    /// advances the cursor along the answer's pointer, and re-derives the
    /// phase. Revisits are tolerated; the deck may be cyclic.
    pub fn answer(&mut self, answer_id: AnswerId) -> EngineResult<Phase> {
        let slide = self
            .deck
            .get(self.cursor)
            .ok_or(EngineError::SlideNotFound(self.cursor))?;
        if !slide.is_answerable() {
            return Err(EngineError::NoAnswers(self.cursor));
        }
        let answer = slide
            .answer(answer_id)
            .ok_or(EngineError::UnknownAnswer {
                slide: self.cursor,
                answer: answer_id,
            })?
            .clone();

        self.pricing.on_answer(
            self.cursor,
            answer.id,
            &self.config.proposal_rules,
            &self.config.sale_rules,
        );
        self.score.apply(&answer.category, answer.points);
        self.log.push(AnsweredQuestion {
            slide_id: self.cursor,
            question: slide.question.clone(),
            selected_answer: answer.text.clone(),
            category: answer.category.clone(),
            points: answer.points,
        });

        self.time_up = false;
        self.cursor = answer.next;
        self.enter_cursor();
        self.maybe_finalize();
        Ok(self.phase())
    }

    /// Advance the countdown by one second.
    ///
    /// On expiry the cursor is forced to the summary slide and the time-up
    /// flag is set, regardless of what the participant would have chosen.
    pub fn tick(&mut self) -> Phase {
        if let Some(stop) = self.timer.tick() {
            debug_assert!(stop.expired);
            self.time_up = true;
            self.capture_duration(u64::from(self.timer.budget()));
            self.cursor = self.config.summary_slide;
            self.enter_cursor();
            self.maybe_finalize();
        }
        self.phase()
    }

    /// Navigation intent: jump to the scoring-summary slide.
    ///
    /// Idempotent with respect to scoring: only answer clicks score.
    pub fn show_summary(&mut self) -> Phase {
        self.jump(self.config.summary_slide)
    }

    /// Navigation intent: jump to the closing-the-day slide.
    pub fn close_day(&mut self) -> Phase {
        self.jump(self.config.closing_slide)
    }

    /// Discard all session state and start over at the entry slide.
    ///
    /// Issues a fresh session id, so persistence of the previous record
    /// (already keyed by its own id) can never alias the new session.
    pub fn restart(&mut self) -> Phase {
        self.session_id = Uuid::new_v4();
        self.started_at = Utc::now();
        self.cursor = self.config.entry_slide;
        self.score = Score::new();
        self.pricing.reset();
        self.timer.reset();
        self.log.clear();
        self.time_up = false;
        self.duration = None;
        self.recorded = false;
        self.completed = None;
        self.enter_cursor();
        self.phase()
    }

    fn jump(&mut self, target: SlideId) -> Phase {
        self.cursor = target;
        self.enter_cursor();
        self.maybe_finalize();
        self.phase()
    }

    /// Timer bookkeeping on cursor movement: answerable slides keep the
    /// countdown running, everything else stops it and captures the elapsed
    /// duration (first capture wins).
    fn enter_cursor(&mut self) {
        match self.deck.get(self.cursor) {
            Some(slide) if slide.is_answerable() => self.timer.resume(),
            _ => {
                if let Some(stop) = self.timer.stop() {
                    self.capture_duration(u64::from(self.timer.budget() - stop.remaining));
                }
            }
        }
    }

    fn capture_duration(&mut self, elapsed: u64) {
        if self.duration.is_none() {
            self.duration = Some(elapsed);
        }
    }

    /// Build the session record on the first terminal boundary reached.
    ///
    /// At most once per session id: reaching both summary and closing in
    /// one run yields a single record.
    fn maybe_finalize(&mut self) {
        if self.recorded {
            return;
        }
        if !matches!(self.phase(), Phase::Summary | Phase::Closing) {
            return;
        }
        self.recorded = true;
        self.completed = Some(SessionRecord {
            session_id: self.session_id,
            owner_id: self.owner_id.clone(),
            started_at: self.started_at,
            duration_seconds: self.duration,
            score: self.score.clone(),
            rating: rating_label(self.score.total, &self.config).to_string(),
            total_sales: self.pricing.sale_total(),
            sales_count: self.pricing.sales_count(),
            game_summary: self.log.clone(),
        });
    }
}
