//! Assessment session: one user's pass through the catalog.
//!
//! A session owns its response store, cursor and (once complete) results.
//! The catalog is shared read-only, so any number of sessions can run
//! side by side without coordination.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> InProgress -> Complete
//!      ^                         |
//!      +--------- reset ---------+
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = AssessmentSession::new(Arc::new(Catalog::builtin()));
//! while !session.is_complete() {
//!     let id = session.current_question().unwrap().id.clone();
//!     session.record_response(&id, 4)?;
//!     session.advance()?;
//! }
//! let results = session.results()?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{Catalog, Question, Section};
use crate::cursor::{Cursor, Step};
use crate::error::AssessmentError;
use crate::events::Event;
use crate::response::{Response, ResponseStore, ResponseValue};
use crate::scoring::{Results, ScoringEngine};

/// Unique identifier for an assessment session.
pub type SessionId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// At the first question with nothing recorded.
    NotStarted,
    InProgress,
    /// Results have been produced.
    Complete,
}

/// Progress information for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total_questions: usize,
    /// Catalog questions with a non-blank answer.
    pub answered: usize,
    /// `position / total_questions`.
    pub fraction: f64,
    pub section_index: usize,
    pub section_count: usize,
    pub state: SessionState,
}

/// A single assessment run.
#[derive(Debug)]
pub struct AssessmentSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    catalog: Arc<Catalog>,
    store: ResponseStore,
    cursor: Cursor,
    results: Option<Results>,
    engine: ScoringEngine,
    events: Vec<Event>,
}

impl AssessmentSession {
    /// Create a session with an entropy-seeded scoring engine.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_engine(catalog, ScoringEngine::new())
    }

    pub fn with_engine(catalog: Arc<Catalog>, engine: ScoringEngine) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            completed_at: None,
            catalog,
            store: ResponseStore::new(),
            cursor: Cursor::new(),
            results: None,
            engine,
            events: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Time spent so far, or until completion.
    pub fn duration_seconds(&self) -> i64 {
        let end = self.completed_at.unwrap_or_else(Utc::now);
        (end - self.started_at).num_seconds()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        if self.cursor.is_complete() {
            SessionState::Complete
        } else if self.cursor.is_at_origin() && self.store.is_empty() {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor.is_complete()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.cursor.current(&self.catalog)
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.catalog.section(self.cursor.section_index())
    }

    pub fn response(&self, question_id: &str) -> Option<&ResponseValue> {
        self.store.get(question_id)
    }

    pub fn can_advance(&self) -> bool {
        !self.cursor.is_complete()
            && self
                .current_question()
                .is_some_and(|q| self.store.is_answered(&q.id))
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor.can_retreat()
    }

    pub fn progress(&self) -> Progress {
        let total_questions = self.catalog.total_questions();
        let position = self.cursor.position(&self.catalog) + 1;
        let answered = self
            .catalog
            .questions()
            .filter(|q| self.store.is_answered(&q.id))
            .count();
        Progress {
            position,
            total_questions,
            answered,
            fraction: position as f64 / total_questions.max(1) as f64,
            section_index: self.cursor.section_index(),
            section_count: self.catalog.sections().len(),
            state: self.state(),
        }
    }

    /// Results of a completed session.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::OutOfSequence`] before completion.
    pub fn results(&self) -> Result<&Results, AssessmentError> {
        self.results
            .as_ref()
            .ok_or_else(|| AssessmentError::out_of_sequence("results", "assessment is not complete"))
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Record (or overwrite) the answer to a question.
    ///
    /// # Errors
    ///
    /// `InvalidResponse` if the question is not in the catalog,
    /// `OutOfSequence` once the session is complete.
    pub fn record_response(
        &mut self,
        question_id: &str,
        value: impl Into<ResponseValue>,
    ) -> Result<(), AssessmentError> {
        if !self.catalog.contains(question_id) {
            tracing::warn!(session = %self.id, question_id, "rejected response for unknown question");
            return Err(AssessmentError::InvalidResponse {
                question_id: question_id.to_string(),
            });
        }
        if self.cursor.is_complete() {
            return Err(AssessmentError::out_of_sequence(
                "record_response",
                "assessment is complete; reset to start over",
            ));
        }

        let value = value.into();
        let replaced = self
            .store
            .record(Response::new(question_id, value.clone()))
            .is_some();
        tracing::debug!(session = %self.id, question_id, %value, replaced, "recorded response");
        self.events.push(Event::ResponseRecorded {
            question_id: question_id.to_string(),
            value,
            replaced,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Move to the next question, scoring the session when stepping past
    /// the last one. A no-op once complete.
    ///
    /// # Errors
    ///
    /// `OutOfSequence` if the current question has no answer.
    pub fn advance(&mut self) -> Result<Step, AssessmentError> {
        if self.cursor.is_complete() {
            return Ok(Step::Stay);
        }
        if !self.can_advance() {
            let question_id = self
                .current_question()
                .map(|q| q.id.clone())
                .unwrap_or_default();
            tracing::warn!(session = %self.id, question_id = %question_id, "advance without an answer");
            return Err(AssessmentError::out_of_sequence(
                "advance",
                format!("question '{question_id}' has no answer"),
            ));
        }

        let step = self.cursor.advance(&self.catalog);
        match step {
            Step::Completed => self.complete(),
            Step::Section => {
                self.push_section_entered();
                self.push_moved(true);
            }
            Step::Question => self.push_moved(true),
            Step::Stay => {}
        }
        Ok(step)
    }

    /// Move to the previous question. A no-op at the first question and
    /// after completion.
    pub fn retreat(&mut self) -> Step {
        let step = self.cursor.retreat(&self.catalog);
        match step {
            Step::Section => {
                self.push_section_entered();
                self.push_moved(false);
            }
            Step::Question => self.push_moved(false),
            Step::Completed | Step::Stay => {}
        }
        step
    }

    /// Clear responses and results and return to the first question.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.store.clear();
        self.results = None;
        self.completed_at = None;
        self.started_at = Utc::now();
        tracing::info!(session = %self.id, "session reset");
        self.events.push(Event::Reset { at: Utc::now() });
    }

    fn complete(&mut self) {
        let results = self.engine.score(self.catalog.index(), self.store.iter());
        let now = Utc::now();
        tracing::info!(
            session = %self.id,
            overall = results.overall_score,
            recommendation = %results.recommendation,
            "assessment complete"
        );
        self.events.push(Event::Completed {
            overall_score: results.overall_score,
            recommendation: results.recommendation,
            at: now,
        });
        self.completed_at = Some(now);
        self.results = Some(results);
    }

    fn push_section_entered(&mut self) {
        if let Some(section) = self.current_section() {
            let event = Event::SectionEntered {
                section_index: self.cursor.section_index(),
                section_id: section.id.clone(),
                at: Utc::now(),
            };
            self.events.push(event);
        }
    }

    fn push_moved(&mut self, forward: bool) {
        let position = self.cursor.position(&self.catalog);
        let question_id = self
            .current_question()
            .map(|q| q.id.clone())
            .unwrap_or_default();
        tracing::debug!(session = %self.id, position, question_id = %question_id, forward, "moved");
        let at = Utc::now();
        self.events.push(if forward {
            Event::Advanced {
                position,
                question_id,
                at,
            }
        } else {
            Event::Retreated {
                position,
                question_id,
                at,
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Recommendation;

    fn session() -> AssessmentSession {
        AssessmentSession::with_engine(Arc::new(Catalog::builtin()), ScoringEngine::deterministic())
    }

    fn answer_current(session: &mut AssessmentSession, value: impl Into<ResponseValue>) {
        let id = session.current_question().unwrap().id.clone();
        session.record_response(&id, value).unwrap();
    }

    fn run_to_completion(session: &mut AssessmentSession, value: i32) {
        while !session.is_complete() {
            answer_current(session, value);
            session.advance().unwrap();
        }
    }

    #[test]
    fn test_new_session_state() {
        let session = session();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.current_question().unwrap().id, "intro-1");
        assert!(!session.can_advance());
        assert!(!session.can_retreat());
        assert!(session.results().is_err());
    }

    #[test]
    fn test_record_and_read_back() {
        let mut session = session();
        session.record_response("psych-1", 4).unwrap();
        assert_eq!(session.response("psych-1"), Some(&ResponseValue::Number(4.0)));
        assert_eq!(session.state(), SessionState::InProgress);

        session.record_response("psych-1", 2).unwrap();
        assert_eq!(session.response("psych-1"), Some(&ResponseValue::Number(2.0)));
        assert_eq!(session.responses().len(), 1);
    }

    #[test]
    fn test_unknown_question_rejected_without_change() {
        let mut session = session();
        let err = session.record_response("nope", 3).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidResponse { .. }));
        assert!(session.responses().is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut session = session();
        assert!(matches!(
            session.advance(),
            Err(AssessmentError::OutOfSequence { operation: "advance", .. })
        ));

        session.record_response("intro-1", "").unwrap();
        assert!(!session.can_advance());
        assert!(session.advance().is_err());

        answer_current(&mut session, 3);
        assert!(session.can_advance());
        assert_eq!(session.advance().unwrap(), Step::Question);
        assert_eq!(session.current_question().unwrap().id, "intro-2");
    }

    #[test]
    fn test_completion_happens_once() {
        let mut session = session();
        run_to_completion(&mut session, 5);

        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.completed_at().is_some());
        let results = session.results().unwrap().clone();
        assert_eq!(results.recommendation, Recommendation::Yes);

        let completed = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, Event::Completed { .. }))
            .count();
        assert_eq!(completed, 1);

        assert_eq!(session.advance().unwrap(), Step::Stay);
        assert!(session.drain_events().is_empty());
        assert_eq!(session.results().unwrap(), &results);
    }

    #[test]
    fn test_no_changes_after_completion() {
        let mut session = session();
        run_to_completion(&mut session, 4);
        assert!(!session.can_advance());
        assert!(!session.can_retreat());
        assert_eq!(session.retreat(), Step::Stay);
        assert!(matches!(
            session.record_response("psych-1", 1),
            Err(AssessmentError::OutOfSequence { operation: "record_response", .. })
        ));
        assert_eq!(session.response("psych-1"), Some(&ResponseValue::Number(4.0)));
    }

    #[test]
    fn test_reset_after_completion() {
        let mut session = session();
        run_to_completion(&mut session, 2);
        session.reset();

        assert_eq!(session.cursor(), Cursor::new());
        assert!(session.responses().is_empty());
        assert!(session.results().is_err());
        assert!(session.completed_at().is_none());
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_retreat_across_sections_emits_events() {
        let mut session = session();
        answer_current(&mut session, 3);
        session.advance().unwrap();
        answer_current(&mut session, "variety");
        session.advance().unwrap();
        session.drain_events();

        assert_eq!(session.retreat(), Step::Section);
        let events = session.drain_events();
        assert!(matches!(&events[0], Event::SectionEntered { section_id, .. } if section_id == "introduction"));
        assert!(matches!(&events[1], Event::Retreated { position: 1, .. }));
        assert_eq!(session.response("intro-2"), Some(&ResponseValue::from("variety")));
    }

    #[test]
    fn test_progress() {
        let mut session = session();
        let progress = session.progress();
        assert_eq!(progress.position, 1);
        assert_eq!(progress.total_questions, 21);
        assert_eq!(progress.answered, 0);

        answer_current(&mut session, 3);
        session.advance().unwrap();
        let progress = session.progress();
        assert_eq!(progress.position, 2);
        assert_eq!(progress.answered, 1);
        assert!((progress.fraction - 2.0 / 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let catalog = Arc::new(Catalog::builtin());
        let mut a = AssessmentSession::with_engine(catalog.clone(), ScoringEngine::deterministic());
        let b = AssessmentSession::with_engine(catalog, ScoringEngine::deterministic());
        a.record_response("psych-1", 5).unwrap();
        assert!(b.response("psych-1").is_none());
        assert_ne!(a.id(), b.id());
    }
}
