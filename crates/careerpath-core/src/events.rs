use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assessment::Stage;

/// Every accepted change to an assessment produces an Event.
/// The presentation layer renders them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    AssessmentStarted {
        session_id: String,
        at: DateTime<Utc>,
    },
    SkillsSelected {
        skills: Vec<String>,
        progress: u8,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        question_id: String,
        rating: u8,
        answered: usize,
        total: usize,
        progress: u8,
        at: DateTime<Utc>,
    },
    /// Every question is answered; results are shown once the ticket fires.
    ResultsScheduled {
        ticket: u64,
        due_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    ResultsCancelled {
        ticket: u64,
        at: DateTime<Utc>,
    },
    AssessmentCompleted {
        session_id: String,
        progress: u8,
        at: DateTime<Utc>,
    },
    AssessmentReset {
        session_id: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        session_id: String,
        stage: Stage,
        progress: u8,
        selected_skills: Vec<String>,
        answers: BTreeMap<String, u8>,
        /// Ticket of the scheduled results transition, if one is pending.
        pending_results: Option<u64>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Headline the presentation layer shows for this event, if any.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Event::AssessmentStarted { .. } => Some("Let's begin your career assessment"),
            Event::SkillsSelected { .. } => Some("Skills selected"),
            Event::AssessmentCompleted { .. } => Some("Assessment completed"),
            _ => None,
        }
    }

    /// Follow-up text for [`Event::headline`].
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Event::AssessmentStarted { .. } => {
                Some("First, select skills you're interested in or have experience with")
            }
            Event::SkillsSelected { .. } => Some("Now let's assess your experience level"),
            Event::AssessmentCompleted { .. } => {
                Some("Here are your personalized career recommendations")
            }
            _ => None,
        }
    }
}
