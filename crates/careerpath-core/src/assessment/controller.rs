//! Assessment controller.
//!
//! The controller is a caller-driven state machine that owns one
//! [`AssessmentState`]. It does not use internal threads: the deferred
//! `questions -> results` transition is recorded as a [`PendingResults`]
//! ticket and fired by `tick()`, `tick_at()` or `complete_scheduled()`.
//!
//! ## State Transitions
//!
//! ```text
//! Intro -> Skills -> Questions -> Results
//!   ^________________________________|  (reset)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = AssessmentController::new();
//! controller.start_test();
//! controller.complete_skill_selection(vec!["Rust".into()])?;
//! controller.submit_answer("Rust-0", 80)?;
//! let results = controller.results()?;
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::question::QuestionId;
use super::stage::Stage;
use crate::error::{AssessmentError, ValidationError};
use crate::events::Event;
use crate::scoring::{self, AssessmentResults};

/// Progress shown on entering the questions stage.
pub const QUESTIONS_ENTRY_PROGRESS: u8 = 25;
/// Share of the progress bar spread across the questions.
pub const QUESTIONS_PROGRESS_SPAN: usize = 70;
/// Progress never exceeds this before results are shown.
pub const QUESTIONS_PROGRESS_CAP: u8 = 95;
pub const RESULTS_PROGRESS: u8 = 100;
pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 100;

/// Snapshot of one assessment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    pub stage: Stage,
    /// Fixed once the run enters `Questions`; defines question order.
    pub selected_skills: Vec<String>,
    /// Question id -> rating. A missing key means unanswered; 0 is a rating.
    pub answers: BTreeMap<String, u8>,
    pub progress: u8,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self {
            stage: Stage::Intro,
            selected_skills: Vec::new(),
            answers: BTreeMap::new(),
            progress: 0,
        }
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn total_questions(&self) -> usize {
        self.selected_skills.len()
    }

    pub fn answered_count(&self) -> usize {
        QuestionId::for_selection(&self.selected_skills)
            .iter()
            .filter(|id| self.answers.contains_key(&id.to_string()))
            .count()
    }

    /// Question ids not yet answered, in selection order.
    pub fn unanswered(&self) -> Vec<String> {
        QuestionId::for_selection(&self.selected_skills)
            .iter()
            .map(ToString::to_string)
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    pub fn all_answered(&self) -> bool {
        !self.selected_skills.is_empty() && self.answered_count() == self.total_questions()
    }
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

/// A scheduled `questions -> results` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResults {
    pub ticket: u64,
    /// When the transition becomes due (epoch milliseconds).
    pub due_epoch_ms: u64,
}

/// Drives one assessment run through its stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentController {
    session_id: String,
    state: AssessmentState,
    /// Display delay before results; 0 transitions immediately.
    #[serde(default)]
    results_delay_ms: u64,
    #[serde(default)]
    pending: Option<PendingResults>,
    #[serde(default)]
    last_ticket: u64,
}

impl AssessmentController {
    /// Create a controller whose results appear as soon as the last
    /// question is answered.
    pub fn new() -> Self {
        Self::with_results_delay(0)
    }

    /// Create a controller that defers results by `results_delay_ms`.
    pub fn with_results_delay(results_delay_ms: u64) -> Self {
        Self {
            session_id: new_session_id(),
            state: AssessmentState::new(),
            results_delay_ms,
            pending: None,
            last_ticket: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn progress(&self) -> u8 {
        self.state.progress
    }

    pub fn selected_skills(&self) -> &[String] {
        &self.state.selected_skills
    }

    pub fn answers(&self) -> &BTreeMap<String, u8> {
        &self.state.answers
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.state.is_answered(question_id)
    }

    pub fn question_ids(&self) -> Vec<String> {
        QuestionId::for_selection(&self.state.selected_skills)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn pending_results(&self) -> Option<PendingResults> {
        self.pending
    }

    pub fn results_delay_ms(&self) -> u64 {
        self.results_delay_ms
    }

    pub fn set_results_delay_ms(&mut self, results_delay_ms: u64) {
        self.results_delay_ms = results_delay_ms;
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            session_id: self.session_id.clone(),
            stage: self.state.stage,
            progress: self.state.progress,
            selected_skills: self.state.selected_skills.clone(),
            answers: self.state.answers.clone(),
            pending_results: self.pending.map(|p| p.ticket),
            at: Utc::now(),
        }
    }

    /// Scored rows and aggregate profile for a finished run.
    ///
    /// # Errors
    /// Returns `InvalidTransition` outside the results stage.
    pub fn results(&self) -> Result<AssessmentResults, AssessmentError> {
        self.require(Stage::Results, "view results")?;
        Ok(scoring::score_results(
            &self.state.selected_skills,
            &self.state.answers,
        )?)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Leave the intro. Calling this from any other stage does nothing.
    pub fn start_test(&mut self) -> Option<Event> {
        if self.state.stage != Stage::Intro {
            tracing::debug!(stage = %self.state.stage, "start ignored outside intro");
            return None;
        }
        self.state.stage = Stage::Skills;
        self.state.progress = 0;
        tracing::debug!(session = %self.session_id, "assessment started");
        Some(Event::AssessmentStarted {
            session_id: self.session_id.clone(),
            at: Utc::now(),
        })
    }

    /// Fix the skill selection and move on to the questions.
    ///
    /// # Errors
    /// `InvalidTransition` outside the skills stage, `InvalidInput` for an
    /// empty selection or an empty skill name.
    pub fn complete_skill_selection(
        &mut self,
        skills: Vec<String>,
    ) -> Result<Event, AssessmentError> {
        self.require(Stage::Skills, "complete skill selection")?;
        if skills.is_empty() {
            tracing::warn!("rejected empty skill selection");
            return Err(ValidationError::EmptyCollection("skill selection".into()).into());
        }
        if let Some(position) = skills.iter().position(String::is_empty) {
            tracing::warn!(position, "rejected empty skill name");
            return Err(ValidationError::InvalidValue {
                field: "skill selection".into(),
                message: format!("skill name at position {position} is empty"),
            }
            .into());
        }
        self.state.selected_skills = skills;
        self.state.stage = Stage::Questions;
        self.state.progress = QUESTIONS_ENTRY_PROGRESS;
        tracing::debug!(
            skills = self.state.selected_skills.len(),
            progress = self.state.progress,
            "skills selected"
        );
        Ok(Event::SkillsSelected {
            skills: self.state.selected_skills.clone(),
            progress: self.state.progress,
            at: Utc::now(),
        })
    }

    /// Record a rating for one question.
    ///
    /// Resubmitting a question overwrites its rating. When the last
    /// unanswered question is filled in, results are entered immediately
    /// (no delay) or scheduled once; a scheduled transition is never
    /// scheduled a second time.
    ///
    /// # Errors
    /// `InvalidTransition` outside the questions stage, `InvalidInput` for a
    /// rating outside `[0, 100]` or an id naming no selected skill position.
    pub fn submit_answer(
        &mut self,
        question_id: &str,
        rating: i64,
    ) -> Result<Vec<Event>, AssessmentError> {
        self.submit_answer_at(question_id, rating, now_ms())
    }

    /// [`submit_answer`](Self::submit_answer) with an explicit clock.
    pub fn submit_answer_at(
        &mut self,
        question_id: &str,
        rating: i64,
        now_epoch_ms: u64,
    ) -> Result<Vec<Event>, AssessmentError> {
        self.require(Stage::Questions, "submit an answer")?;
        let rating = validate_rating(rating)?;
        let id = self.resolve_question(question_id)?;
        let key = id.to_string();

        self.state.answers.insert(key.clone(), rating);
        let answered = self.state.answered_count();
        let total = self.state.total_questions();
        self.state.progress = questions_progress(answered, total);
        tracing::debug!(
            question = %key,
            rating,
            answered,
            total,
            progress = self.state.progress,
            "answer recorded"
        );

        let mut events = vec![Event::AnswerRecorded {
            question_id: key,
            rating,
            answered,
            total,
            progress: self.state.progress,
            at: Utc::now(),
        }];

        if answered == total {
            if self.results_delay_ms == 0 {
                events.push(self.enter_results());
            } else if self.pending.is_none() {
                events.push(self.schedule_results(now_epoch_ms));
            }
        }
        Ok(events)
    }

    /// Call periodically. Fires a due results transition.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    pub fn tick_at(&mut self, now_epoch_ms: u64) -> Option<Event> {
        let pending = self.pending?;
        if now_epoch_ms < pending.due_epoch_ms {
            return None;
        }
        self.complete_scheduled(pending.ticket)
    }

    /// Fire the scheduled transition identified by `ticket`.
    ///
    /// Stale or cancelled tickets are ignored, so a transition cannot be
    /// completed twice.
    pub fn complete_scheduled(&mut self, ticket: u64) -> Option<Event> {
        match self.pending {
            Some(pending) if pending.ticket == ticket && self.state.stage == Stage::Questions => {
                Some(self.enter_results())
            }
            _ => {
                tracing::debug!(ticket, "ignoring stale results ticket");
                None
            }
        }
    }

    /// Cancel a scheduled results transition, if any.
    pub fn cancel_pending(&mut self) -> Option<Event> {
        let pending = self.pending.take()?;
        tracing::debug!(ticket = pending.ticket, "results transition cancelled");
        Some(Event::ResultsCancelled {
            ticket: pending.ticket,
            at: Utc::now(),
        })
    }

    /// Discard the run and go back to the intro.
    pub fn reset(&mut self) -> Event {
        self.state = AssessmentState::new();
        self.pending = None;
        self.session_id = new_session_id();
        tracing::debug!(session = %self.session_id, "assessment reset");
        Event::AssessmentReset {
            session_id: self.session_id.clone(),
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn require(&self, stage: Stage, operation: &'static str) -> Result<(), AssessmentError> {
        if self.state.stage == stage {
            return Ok(());
        }
        tracing::warn!(operation, stage = %self.state.stage, "operation not allowed");
        Err(AssessmentError::InvalidTransition {
            operation,
            stage: self.state.stage,
        })
    }

    fn resolve_question(&self, question_id: &str) -> Result<QuestionId, ValidationError> {
        let id: QuestionId = question_id.parse()?;
        if !id.matches(&self.state.selected_skills) {
            tracing::warn!(question = question_id, "unknown question");
            return Err(ValidationError::UnknownQuestion(question_id.to_string()));
        }
        Ok(id)
    }

    fn schedule_results(&mut self, now_epoch_ms: u64) -> Event {
        self.last_ticket += 1;
        let pending = PendingResults {
            ticket: self.last_ticket,
            due_epoch_ms: now_epoch_ms.saturating_add(self.results_delay_ms),
        };
        self.pending = Some(pending);
        tracing::debug!(
            ticket = pending.ticket,
            delay_ms = self.results_delay_ms,
            "results scheduled"
        );
        Event::ResultsScheduled {
            ticket: pending.ticket,
            due_at: epoch_ms_to_datetime(pending.due_epoch_ms),
            at: Utc::now(),
        }
    }

    fn enter_results(&mut self) -> Event {
        self.pending = None;
        self.state.stage = Stage::Results;
        self.state.progress = RESULTS_PROGRESS;
        tracing::info!(
            session = %self.session_id,
            skills = self.state.total_questions(),
            "assessment completed"
        );
        Event::AssessmentCompleted {
            session_id: self.session_id.clone(),
            progress: self.state.progress,
            at: Utc::now(),
        }
    }
}

impl Default for AssessmentController {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress while answering: 25 plus an even share of 70 per answered
/// question, rounded down and capped at 95.
pub fn questions_progress(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return QUESTIONS_ENTRY_PROGRESS;
    }
    let earned = answered.min(total) * QUESTIONS_PROGRESS_SPAN / total;
    let progress = usize::from(QUESTIONS_ENTRY_PROGRESS) + earned;
    progress.min(usize::from(QUESTIONS_PROGRESS_CAP)) as u8
}

fn validate_rating(rating: i64) -> Result<u8, ValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".into(),
            value: rating,
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    Ok(rating as u8)
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn epoch_ms_to_datetime(ms: u64) -> DateTime<Utc> {
    i64::try_from(ms)
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .unwrap_or_else(Utc::now)
}

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn in_questions(names: &[&str]) -> AssessmentController {
        let mut controller = AssessmentController::new();
        controller.start_test();
        controller.complete_skill_selection(skills(names)).unwrap();
        controller
    }

    #[test]
    fn starts_in_intro() {
        let controller = AssessmentController::new();
        assert_eq!(controller.stage(), Stage::Intro);
        assert_eq!(controller.progress(), 0);
        assert!(controller.selected_skills().is_empty());
    }

    #[test]
    fn start_is_a_noop_outside_intro() {
        let mut controller = AssessmentController::new();
        assert!(controller.start_test().is_some());
        assert_eq!(controller.stage(), Stage::Skills);
        assert!(controller.start_test().is_none());
        assert_eq!(controller.stage(), Stage::Skills);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut controller = AssessmentController::new();
        controller.start_test();
        let err = controller.complete_skill_selection(Vec::new()).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(controller.stage(), Stage::Skills);
        assert_eq!(controller.progress(), 0);
    }

    #[test]
    fn empty_skill_name_is_rejected() {
        let mut controller = AssessmentController::new();
        controller.start_test();
        let before = controller.state().clone();
        for selection in [vec![""], vec!["Rust", ""]] {
            let err = controller
                .complete_skill_selection(skills(&selection))
                .unwrap_err();
            assert!(matches!(
                err,
                AssessmentError::InvalidInput(ValidationError::InvalidValue { .. })
            ));
            assert_eq!(controller.state(), &before);
        }
    }

    #[test]
    fn every_generated_question_can_be_answered() {
        let mut controller = in_questions(&["Front-end", "C++", "Go"]);
        for id in controller.question_ids() {
            controller.submit_answer(&id, 50).unwrap();
        }
        assert_eq!(controller.stage(), Stage::Results);
        assert_eq!(controller.progress(), 100);
    }

    #[test]
    fn selection_is_kept_in_order() {
        let controller = in_questions(&["A", "B", "C"]);
        assert_eq!(controller.progress(), 25);
        assert_eq!(controller.selected_skills(), skills(&["A", "B", "C"]).as_slice());
        assert_eq!(controller.question_ids(), vec!["A-0", "B-1", "C-2"]);
    }

    #[test]
    fn selection_outside_skills_stage() {
        let mut controller = AssessmentController::new();
        let err = controller
            .complete_skill_selection(skills(&["A"]))
            .unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(controller.stage(), Stage::Intro);
    }

    #[test]
    fn zero_rating_counts_as_answered() {
        let mut controller = in_questions(&["A", "B"]);
        controller.submit_answer("A-0", 0).unwrap();
        assert!(controller.is_answered("A-0"));
        assert!(!controller.is_answered("B-1"));
        assert_eq!(controller.state().answered_count(), 1);
        assert_eq!(controller.state().unanswered(), vec!["B-1"]);
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut controller = in_questions(&["A", "B"]);
        let err = controller.submit_answer("X-0", 50).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidInput(ValidationError::UnknownQuestion("X-0".into()))
        );
        let err = controller.submit_answer("A-1", 50).unwrap_err();
        assert!(err.is_invalid_input());
        let err = controller.submit_answer("garbage", 50).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(controller.answers().is_empty());
        assert_eq!(controller.progress(), 25);
    }

    #[test]
    fn out_of_range_rating_leaves_state_unchanged() {
        let mut controller = in_questions(&["A"]);
        let before = controller.state().clone();
        for rating in [-1, 101, i64::MAX] {
            let err = controller.submit_answer("A-0", rating).unwrap_err();
            assert!(matches!(
                err,
                AssessmentError::InvalidInput(ValidationError::OutOfRange { .. })
            ));
        }
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn answering_outside_questions() {
        let mut controller = AssessmentController::new();
        let err = controller.submit_answer("A-0", 10).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidTransition {
                operation: "submit an answer",
                stage: Stage::Intro,
            }
        );
    }

    #[test]
    fn progress_during_questions() {
        let mut controller = in_questions(&["A", "B", "C", "D"]);
        controller.submit_answer("A-0", 10).unwrap();
        assert_eq!(controller.progress(), 42); // 25 + 17.5
        controller.submit_answer("B-1", 10).unwrap();
        assert_eq!(controller.progress(), 60);
        controller.submit_answer("C-2", 10).unwrap();
        assert_eq!(controller.progress(), 77);
    }

    #[test]
    fn resubmitting_does_not_double_count() {
        let mut controller = in_questions(&["A", "B"]);
        controller.submit_answer("A-0", 10).unwrap();
        let progress = controller.progress();
        controller.submit_answer("A-0", 90).unwrap();
        assert_eq!(controller.progress(), progress);
        assert_eq!(controller.answers()["A-0"], 90);
        assert_eq!(controller.stage(), Stage::Questions);
    }

    #[test]
    fn last_answer_enters_results_at_full_progress() {
        let mut controller = in_questions(&["A", "B", "C", "D"]);
        for (i, id) in ["A-0", "B-1", "C-2"].iter().enumerate() {
            controller.submit_answer(id, i as i64 * 10).unwrap();
        }
        let events = controller.submit_answer("D-3", 100).unwrap();
        assert_eq!(controller.stage(), Stage::Results);
        assert_eq!(controller.progress(), 100);
        assert!(matches!(
            events.last(),
            Some(Event::AssessmentCompleted { progress: 100, .. })
        ));
        assert!(controller.results().is_ok());
    }

    #[test]
    fn duplicate_skill_names_are_separate_questions() {
        let mut controller = in_questions(&["Go", "Go"]);
        controller.submit_answer("Go-0", 20).unwrap();
        assert_eq!(controller.stage(), Stage::Questions);
        controller.submit_answer("Go-1", 80).unwrap();
        assert_eq!(controller.stage(), Stage::Results);
        let results = controller.results().unwrap();
        assert_eq!(results.scored_skills.len(), 2);
        assert_eq!(results.aggregate.average_rating, 50.0);
    }

    #[test]
    fn results_require_results_stage() {
        let controller = in_questions(&["A"]);
        assert!(controller.results().unwrap_err().is_invalid_transition());
    }

    #[test]
    fn delayed_results_wait_for_tick() {
        let mut controller = AssessmentController::with_results_delay(500);
        controller.start_test();
        controller.complete_skill_selection(skills(&["A"])).unwrap();

        let events = controller.submit_answer_at("A-0", 40, 1_000).unwrap();
        assert!(matches!(
            events.last(),
            Some(Event::ResultsScheduled { ticket: 1, .. })
        ));
        assert_eq!(controller.stage(), Stage::Questions);
        assert_eq!(controller.progress(), 95);

        assert!(controller.tick_at(1_499).is_none());
        assert_eq!(controller.stage(), Stage::Questions);

        assert!(controller.tick_at(1_500).is_some());
        assert_eq!(controller.stage(), Stage::Results);
        assert_eq!(controller.progress(), 100);
        assert!(controller.pending_results().is_none());
    }

    #[test]
    fn repeated_last_answer_schedules_once() {
        let mut controller = AssessmentController::with_results_delay(500);
        controller.start_test();
        controller.complete_skill_selection(skills(&["A"])).unwrap();

        controller.submit_answer_at("A-0", 40, 1_000).unwrap();
        let events = controller.submit_answer_at("A-0", 60, 1_100).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(controller.answers()["A-0"], 60);

        let pending = controller.pending_results().unwrap();
        assert_eq!(pending.ticket, 1);
        assert_eq!(pending.due_epoch_ms, 1_500);

        assert!(controller.complete_scheduled(1).is_some());
        // Completing again is a no-op.
        assert!(controller.complete_scheduled(1).is_none());
        assert_eq!(controller.progress(), 100);
    }

    #[test]
    fn cancelled_ticket_is_stale() {
        let mut controller = AssessmentController::with_results_delay(500);
        controller.start_test();
        controller.complete_skill_selection(skills(&["A"])).unwrap();
        controller.submit_answer_at("A-0", 40, 1_000).unwrap();

        assert!(controller.cancel_pending().is_some());
        assert!(controller.complete_scheduled(1).is_none());
        assert!(controller.tick_at(u64::MAX).is_none());
        assert_eq!(controller.stage(), Stage::Questions);

        // Answering again schedules a fresh ticket.
        let events = controller.submit_answer_at("A-0", 40, 2_000).unwrap();
        assert!(matches!(
            events.last(),
            Some(Event::ResultsScheduled { ticket: 2, .. })
        ));
    }

    #[test]
    fn reset_returns_to_intro() {
        let mut controller = in_questions(&["A"]);
        let session = controller.session_id().to_string();
        controller.submit_answer("A-0", 70).unwrap();
        controller.reset();
        assert_eq!(controller.stage(), Stage::Intro);
        assert_eq!(controller.progress(), 0);
        assert!(controller.selected_skills().is_empty());
        assert!(controller.answers().is_empty());
        assert_ne!(controller.session_id(), session);
    }

    #[test]
    fn progress_formula() {
        assert_eq!(questions_progress(0, 3), 25);
        assert_eq!(questions_progress(1, 3), 48);
        assert_eq!(questions_progress(3, 3), 95);
        assert_eq!(questions_progress(1, 1), 95);
        assert_eq!(questions_progress(0, 0), 25);
    }

    #[test]
    fn controller_roundtrips_through_json() {
        let mut controller = AssessmentController::with_results_delay(250);
        controller.start_test();
        controller.complete_skill_selection(skills(&["A", "B"])).unwrap();
        controller.submit_answer("A-0", 0).unwrap();

        let json = serde_json::to_string(&controller).unwrap();
        let restored: AssessmentController = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), controller.state());
        assert_eq!(restored.results_delay_ms(), 250);
        assert_eq!(restored.session_id(), controller.session_id());
    }
}
