//! # CareerPath Core Library
//!
//! This library provides the core logic of the CareerPath career assessment.
//! All operations are available to a standalone CLI binary; any richer
//! front end is a thin presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Assessment Controller**: A forward-only state machine
//!   (`intro -> skills -> questions -> results`) that owns the selected
//!   skills, the per-question ratings and the progress percentage
//! - **Scoring**: Pure functions that label each rated skill and aggregate
//!   the run into a profile
//! - **Catalog**: Static career and learning recommendations shown beside
//!   the results
//! - **Storage**: TOML configuration and a SQLite key-value store for hosts
//!   that keep a run across processes
//!
//! ## Key Components
//!
//! - [`AssessmentController`]: Core assessment state machine
//! - [`ResultsScheduler`]: Deferred results transition on tokio
//! - [`score_results`]: Results payload for a finished run
//! - [`Config`]: Application configuration management

pub mod assessment;
pub mod catalog;
pub mod error;
pub mod events;
pub mod scoring;
pub mod storage;

pub use assessment::{
    AssessmentController, AssessmentState, PendingResults, QuestionId, ResultsScheduler,
    ScheduledResults, Stage,
};
pub use catalog::{recommend, CareerMatch, CareerRecommendation, Recommendations, SkillToDevelop};
pub use error::{AssessmentError, ConfigError, CoreError, ScoringError, ValidationError};
pub use events::Event;
pub use scoring::{
    average_rating, category_of, demand_of, level_of, score_results, AggregateProfile,
    AssessmentResults, Demand, ScoredSkill, SkillCategory, SkillLevel,
};
pub use storage::{Config, Database};
