mod controller;
mod question;
mod scheduler;
mod stage;

pub use controller::{
    questions_progress, AssessmentController, AssessmentState, PendingResults, MAX_RATING,
    MIN_RATING, QUESTIONS_ENTRY_PROGRESS, QUESTIONS_PROGRESS_CAP, QUESTIONS_PROGRESS_SPAN,
    RESULTS_PROGRESS,
};
pub use question::QuestionId;
pub use scheduler::{ResultsScheduler, ScheduledResults};
pub use stage::Stage;
